use colored::*;
use orders_core::{CheckConfig, ORDER_ID};
use orders_report::{DeliveryStatus, OutputStatus, RunOutcome};
use orders_validator::{Rule, RuleSet};
use serde_json::json;

const RULE_WIDTH: usize = 60;

pub fn print_run_report(outcome: &RunOutcome, format: &str) {
    match format {
        "json" => print_json_run_report(outcome),
        _ => print_text_run_report(outcome),
    }
}

fn print_text_run_report(outcome: &RunOutcome) {
    println!("\n{}", "═".repeat(RULE_WIDTH));
    println!("{}", "  VALIDATION REPORT".bold());
    println!("{}", "═".repeat(RULE_WIDTH));

    if outcome.summary.passed() {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "Validation PASSED".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Validation FAILED".red().bold()
        );
    }

    if !outcome.partition.invalid.is_empty() {
        println!("\n{}", "Invalid rows:".red().bold());
        for row in &outcome.partition.invalid {
            let order_id = row.raw.get(ORDER_ID).map(String::as_str).unwrap_or("");
            println!(
                "  Row {} ({}): {}",
                row.row_number,
                order_id,
                row.error_details().red()
            );
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Total rows:   {}", outcome.summary.total);
    println!("  Valid rows:   {}", outcome.summary.valid);
    println!("  Invalid rows: {}", outcome.summary.invalid);

    println!("\n{}", "Outputs:".bold());
    println!("  Valid:   {}", describe_output(&outcome.persisted.valid));
    println!("  Invalid: {}", describe_output(&outcome.persisted.invalid));

    match &outcome.delivery {
        Some(DeliveryStatus::Delivered) => print_info("Alert sent to webhook"),
        Some(DeliveryStatus::Printed) => print_info("Alert printed to console"),
        Some(DeliveryStatus::Failed(reason)) => {
            println!("{} {}", "!".yellow().bold(), format!("Alert failed: {}", reason).yellow())
        }
        None => {}
    }

    println!("  Exit code: {}", outcome.exit_status.code());
    println!("{}", "═".repeat(RULE_WIDTH));
}

fn describe_output(status: &OutputStatus) -> String {
    match status {
        OutputStatus::Written { path, rows } => format!("{} ({} rows)", path.display(), rows),
        OutputStatus::Skipped { path } => format!("{} (skipped, no rows)", path.display()),
    }
}

fn print_json_run_report(outcome: &RunOutcome) {
    let (notification, notification_error) = match &outcome.delivery {
        Some(DeliveryStatus::Delivered) => ("delivered", None),
        Some(DeliveryStatus::Printed) => ("printed", None),
        Some(DeliveryStatus::Failed(reason)) => ("failed", Some(reason.as_str())),
        None => ("none", None),
    };

    let output = json!({
        "passed": outcome.summary.passed(),
        "exit_code": outcome.exit_status.code(),
        "summary": outcome.summary,
        "outputs": outcome.persisted,
        "notification": notification,
        "notification_error": notification_error,
        "invalid_rows": outcome.partition.invalid.iter().map(|row| json!({
            "row": row.row_number,
            "order_id": row.raw.get(ORDER_ID),
            "errors": row.errors,
        })).collect::<Vec<_>>(),
    });

    match serde_json::to_string_pretty(&output) {
        Ok(text) => println!("{}", text),
        Err(e) => print_error(&format!("Failed to render JSON report: {}", e)),
    }
}

pub fn print_config_report(config: &CheckConfig, rules: &RuleSet, format: &str) {
    match format {
        "json" => print_json_config_report(config, rules),
        _ => print_text_config_report(config, rules),
    }
}

fn print_text_config_report(config: &CheckConfig, rules: &RuleSet) {
    print_success("Configuration is valid");

    println!("\nConfiguration:");
    println!("  Input:          {}", config.input.path.display());
    println!("  Delimiter:      {:?}", config.input.delimiter);
    println!("  Trim cells:     {}", config.input.trim);
    println!("  Currency:       {}", config.market.currency);
    println!("  Ship country:   {}", config.market.ship_country);
    println!("  Valid output:   {}", config.outputs.valid.display());
    println!("  Invalid output: {}", config.outputs.invalid.display());
    println!("  Error details:  {}", config.outputs.include_error_details);
    println!(
        "  Alerts:         {}",
        if config.notification.webhook().is_some() {
            "webhook"
        } else {
            "console"
        }
    );

    println!("\nRules:");
    for (i, rule) in rules.iter().enumerate() {
        println!("  {}. {}: {}", i + 1, rule.field, describe_rule(&rule.rule));
    }
}

fn print_json_config_report(config: &CheckConfig, rules: &RuleSet) {
    // The URL may embed a secret token; only report whether one is set.
    let output = json!({
        "input": config.input,
        "market": config.market,
        "outputs": config.outputs,
        "notification": {
            "webhook": config.notification.webhook().is_some(),
            "title": config.notification.title,
        },
        "rules": rules,
    });

    match serde_json::to_string_pretty(&output) {
        Ok(text) => println!("{}", text),
        Err(e) => print_error(&format!("Failed to render JSON report: {}", e)),
    }
}

fn describe_rule(rule: &Rule) -> String {
    match rule {
        Rule::NonEmpty => "not empty".to_string(),
        Rule::NonNegativeInteger => "integer >= 0".to_string(),
        Rule::NonNegativeDecimal => "number >= 0".to_string(),
        Rule::Equals { expected, .. } => format!("equals {}", expected),
        Rule::Date { format, .. } => format!("date ({})", format),
    }
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
