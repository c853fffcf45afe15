//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, entropy_bar, pattern_to_emoji};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult, SuggestReport};
use colored::Colorize;

/// Print ranked suggestions and, for small pools, the remaining words
pub fn print_suggest_report(report: &SuggestReport<'_>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SUGGESTIONS".bright_cyan().bold(),
        format!("({} candidates)", report.candidates).bright_black()
    );
    println!("{}", "═".repeat(60).cyan());

    println!();
    for (i, suggestion) in report.suggestions.iter().enumerate() {
        let bar = entropy_bar(suggestion.entropy, report.candidates, 20);
        println!(
            "  {}. {}  [{}] {}",
            i + 1,
            suggestion.word.text().to_uppercase().bright_white().bold(),
            bar.green(),
            format!("{:.3} bits", suggestion.entropy).bright_yellow()
        );
    }

    if !report.remaining.is_empty() {
        let shown = report
            .remaining
            .iter()
            .map(|word| word.text().to_uppercase())
            .collect::<Vec<_>>()
            .join(", ");
        let more = report.candidates - report.remaining.len();
        if more > 0 {
            println!("\n  Candidates: {shown} {}", format!("(+{more} more)").bright_black());
        } else {
            println!("\n  Candidates: {shown}");
        }
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_guess(&step.word, step.pattern),
            pattern_to_emoji(step.pattern)
        );

        if !verbose {
            continue;
        }

        println!(
            "  Candidates: {} → {}",
            step.candidates_before, step.candidates_after
        );
        println!(
            "  Marks:      {} hit, {} present",
            step.pattern.count_hits(),
            step.pattern.count_present()
        );
        if let Some(entropy) = step.entropy {
            println!("  Entropy:    {entropy:.3} bits");
        }
        if let Some(expected) = step.expected_remaining {
            println!("  Expected:   {expected:.1} candidates");
        }
        if step.candidates_after > 0 && step.candidates_before > step.candidates_after {
            let ratio = step.candidates_before as f64 / step.candidates_after as f64;
            println!(
                "  Info gained: {:.3} bits ({ratio:.1}x reduction)",
                ratio.log2()
            );
        }
    }

    println!();
    let count = result.guesses.len();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {count} {}!", plural(count, "guess", "guesses"))
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {count} {}", plural(count, "guess", "guesses"))
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let metrics = &result.metrics;
    let bar = entropy_bar(metrics.entropy, result.total_candidates, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", metrics.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        metrics.expected_remaining
    );
    println!(
        "   Worst case:  {} candidates",
        metrics.max_partition
    );
    println!("   Groups:      {} distinct patterns", metrics.partitions);
    if result.is_candidate {
        println!("   {}", "Could still be the answer".green());
    } else {
        println!("   {}", "Cannot be the answer".bright_black());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}/{}", result.solved, result.total_words).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guess_count, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.failures.is_empty() {
        println!(
            "\n❌ {} {}",
            "Failed:".red().bold(),
            result.failures.join(", ").to_uppercase()
        );
    }
}

const fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
