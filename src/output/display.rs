//! Display functions for command results

use super::formatters::{create_progress_bar, describe_edit, ladder_to_arrows};
use crate::commands::{BenchmarkResult, LadderResult, NeighborResult, PathResult, VerifyOutcome};
use colored::Colorize;

/// Print the result of a ladder search
pub fn print_ladder_result(result: &LadderResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ladder: {} → {}",
        result.start.to_uppercase().bright_yellow().bold(),
        result.goal.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if result.found() {
        let words = result.ladder.words();
        for (i, word) in words.iter().enumerate() {
            if i == 0 || !verbose {
                println!("  {:>2}. {}", i + 1, word.text().to_uppercase());
            } else {
                println!(
                    "  {:>2}. {}  {}",
                    i + 1,
                    word.text().to_uppercase(),
                    format!("({})", describe_edit(words[i - 1].text(), word.text())).bright_black()
                );
            }
        }
        println!("\n  {}", ladder_to_arrows(&result.ladder));
    }

    if verbose {
        println!();
        println!(
            "  Start in dictionary: {}",
            yes_no(result.start_in_dictionary)
        );
        println!("  Goal in dictionary:  {}", yes_no(result.goal_in_dictionary));
        println!("  Words expanded:      {}", result.expanded);
        println!(
            "  Search time:         {:.3}ms",
            result.duration.as_secs_f64() * 1000.0
        );
    }

    println!();
    if result.found() {
        println!(
            "{}",
            format!(
                "✅ Found a {}-step ladder ({} words)",
                result.ladder.steps(),
                result.ladder.len()
            )
            .green()
            .bold()
        );
        if !result.verified {
            println!("{}", "⚠️  Ladder failed verification".yellow().bold());
        }
    } else if result.limit_reached {
        println!(
            "{}",
            format!(
                "⏹  Gave up after expanding {} words (limit reached)",
                result.expanded
            )
            .yellow()
            .bold()
        );
    } else {
        println!("{}", "❌ No ladder found".red().bold());
        if !result.goal_in_dictionary {
            println!(
                "   {} is not in the dictionary",
                result.goal.to_uppercase().bright_yellow()
            );
        }
    }
}

/// Print a word's neighbors
pub fn print_neighbors(result: &NeighborResult) {
    println!(
        "\n{} {}{}",
        "NEIGHBORS OF".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold(),
        if result.in_dictionary {
            String::new()
        } else {
            " (not in dictionary)".bright_black().to_string()
        }
    );

    if result.neighbors.is_empty() {
        println!("   (none)");
        return;
    }

    for neighbor in &result.neighbors {
        println!(
            "   {:<16} {}",
            neighbor,
            describe_edit(&result.word, neighbor).bright_black()
        );
    }
    println!("\n   {} neighbors", result.neighbors.len());
}

/// Print the outcome of verifying a ladder
pub fn print_verify_outcome(outcome: &VerifyOutcome) {
    println!("\nLadder: {}", outcome.words.join(" → "));
    match &outcome.result {
        Ok(()) => println!("{}", "✅ Word ladder is valid.".green().bold()),
        Err(e) => println!("{}", format!("❌ {e}").red().bold()),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Pairs searched:   {}", result.total_pairs);
    println!(
        "   Ladders found:    {}",
        format!("{}", result.found).green()
    );
    println!(
        "   Unreachable:      {}",
        format!("{}", result.unreachable).yellow()
    );
    if let Some(limit) = result.max_expansions {
        println!("   Expansion cap:    {limit}");
    }
    if result.limited > 0 {
        println!("   Limit reached:    {}", result.limited);
    }
    println!(
        "   Average length:   {}",
        format!("{:.2}", result.average_length).bright_yellow().bold()
    );
    println!("   Words expanded:   {}", result.total_expanded);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Searches/second:  {:.1}", result.searches_per_second);

    if let Some(longest) = &result.longest {
        println!("\n🪜 {}", "Longest ladder:".bright_cyan().bold());
        println!("   {}", ladder_to_arrows(longest));
    }

    if result.found == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution (words per ladder):".bright_cyan().bold());
    for (&length, &count) in &result.distribution {
        let pct = (count as f64 / result.found as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {length:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}

/// Print a weighted shortest path
pub fn print_path_result(result: &PathResult) {
    println!(
        "\nGraph: {} vertices, {} edges",
        result.vertex_count, result.edge_count
    );
    match result.total_cost {
        Some(cost) => {
            let path: Vec<String> = result.path.iter().map(ToString::to_string).collect();
            println!("Path {} → {}: {}", result.source, result.destination, path.join(" "));
            println!("Total cost is {}", format!("{cost}").bright_yellow().bold());
        }
        None => println!(
            "{}",
            format!(
                "❌ Vertex {} is unreachable from {}",
                result.destination, result.source
            )
            .red()
            .bold()
        ),
    }
}

fn yes_no(value: bool) -> colored::ColoredString {
    if value { "yes".green() } else { "no".red() }
}
