//! Integration Test Harness
//!
//! Runs every integration test category and prints a summary.
//!
//! # Usage
//!
//! Run all tests:
//! ```text
//! cargo run -p integration-tests
//! ```
//!
//! Run one category:
//! ```text
//! cargo test -p integration-tests --test record_tests
//! cargo test -p integration-tests --test interop_tests
//! cargo test -p integration-tests --test string_buffer_tests
//! ```

use std::process::Command;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct TestCategory {
    name: &'static str,
    description: &'static str,
    test_name: &'static str,
}

const TEST_CATEGORIES: &[TestCategory] = &[
    TestCategory {
        name: "Record Tests",
        description: "Mixed-field records built and parsed with cursor accounting",
        test_name: "record_tests",
    },
    TestCategory {
        name: "Interop Tests",
        description: "Cross byte-order images and reference encoders",
        test_name: "interop_tests",
    },
    TestCategory {
        name: "String Buffer Tests",
        description: "Reusable string slots embedded in records",
        test_name: "string_buffer_tests",
    },
];

fn print_test_categories() {
    println!("flatcodec integration tests");
    println!("{}", "-".repeat(80));
    for (i, cat) in TEST_CATEGORIES.iter().enumerate() {
        println!("  {}. {} - {}", i + 1, cat.name, cat.description);
    }
    println!("{}", "-".repeat(80));
    println!();
}

fn run_test_category(category: &TestCategory) -> (bool, Duration, String) {
    println!("\n{}", "=".repeat(80));
    println!("Running: {}", category.name);
    println!("{}", "=".repeat(80));

    let start = Instant::now();

    let output = Command::new("cargo")
        .args(["test", "-p", "integration-tests", "--test", category.test_name, "--", "--nocapture"])
        .output();

    let duration = start.elapsed();

    match output {
        Ok(output) => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let stderr = String::from_utf8_lossy(&output.stderr);

            if !stdout.is_empty() {
                println!("{}", stdout);
            }
            if !stderr.is_empty() {
                eprintln!("{}", stderr);
            }

            let success = output.status.success();
            let summary = if success {
                "PASSED".to_string()
            } else {
                format!("FAILED (exit code: {:?})", output.status.code())
            };

            (success, duration, summary)
        }
        Err(e) => (false, duration, format!("Failed to execute: {}", e)),
    }
}

fn main() {
    print_test_categories();

    let total_start = Instant::now();
    let results: Vec<_> = TEST_CATEGORIES
        .iter()
        .map(|category| {
            let (success, duration, summary) = run_test_category(category);
            (category.name, success, duration, summary)
        })
        .collect();
    let total_duration = total_start.elapsed();

    println!("\n{}", "=".repeat(80));
    println!("SUMMARY");
    println!("{}", "=".repeat(80));

    let failed = results.iter().filter(|(_, s, _, _)| !*s).count();
    println!(
        "\nCategories: {} | Passed: {} | Failed: {}",
        results.len(),
        results.len() - failed,
        failed
    );
    println!("Total Duration: {:?}\n", total_duration);

    println!("{:<30} {:<10} {:<15} Details", "Category", "Status", "Duration");
    println!("{}", "-".repeat(80));
    for (name, success, duration, summary) in &results {
        let status = if *success { "PASS" } else { "FAIL" };
        println!("{:<30} {:<10} {:<15?} {}", name, status, duration, summary);
    }

    if failed > 0 {
        std::process::exit(1);
    }
}
