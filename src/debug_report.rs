use symbex::{ExpandResultVerbose, ReplaceOutcome, TriggerPolicy, TriggerRule, TriggerTable, categories, classify_key};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(input: &str, res: &ExpandResultVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⌨  Typing: {:?}", input), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Replacements ━━━", ansi::GRAY));
    if res.expansions.is_empty() {
        println!("{}", palette.dim("  No replacements"));
    }
    for (idx, exp) in res.expansions.iter().enumerate() {
        let outcome = match exp.outcome {
            ReplaceOutcome::Replaced { single_step: true } => palette.paint("✓ one step", ansi::GREEN),
            ReplaceOutcome::Replaced { single_step: false } => palette.paint("✓ delete + insert", ansi::YELLOW),
            ReplaceOutcome::Stale => palette.paint("✗ stale range", ansi::RED),
        };
        println!(
            "  {} {} {} {} {} {}",
            palette.paint(format!("[{}]", idx), ansi::GRAY),
            palette.paint(format!("{:?}", exp.key), ansi::BLUE),
            palette.dim("→"),
            palette.bold(palette.paint(format!("{:?}", exp.value), ansi::GREEN)),
            palette.paint(format!("chars {}..{}", exp.range.start, exp.range.end), ansi::YELLOW),
            outcome,
        );
    }

    println!("\n{}", palette.paint("━━━ Result ━━━", ansi::GRAY));
    println!("  {}", palette.bold(format!("{:?}", res.text)));
    println!("  {} {}", palette.dim("cursor:"), res.cursor);

    let details = &res.details;
    let stats = &details.stats;
    println!("\n{}", palette.paint("━━━ Matching ━━━", ansi::GRAY));
    println!(
        "  Table: {} rules  │  Checks: {}  │  Matches: {}  │  Skipped (selection): {}  │  Stale: {}",
        palette.paint(details.table_len.to_string(), ansi::BLUE),
        palette.paint(stats.checks.to_string(), ansi::BLUE),
        palette.paint(stats.matches.to_string(), ansi::GREEN),
        palette.dim(stats.skipped_selection.to_string()),
        palette.dim(stats.stale.to_string()),
    );
    let totals = &stats.totals;
    println!(
        "  Rules considered: {}  │  policy {}  room {}  mismatch {}  boundary {}",
        palette.paint(totals.rules_considered.to_string(), ansi::YELLOW),
        palette.dim(totals.skipped_policy.to_string()),
        palette.dim(totals.skipped_room.to_string()),
        palette.dim(totals.skipped_mismatch.to_string()),
        palette.dim(totals.skipped_boundary.to_string()),
    );
    for dead in &details.shadowed {
        println!(
            "  {} rule {} ({:?}) is shadowed by rule {}",
            palette.paint("⚠", ansi::YELLOW),
            dead.index,
            dead.key,
            dead.shadowed_by
        );
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Matching: {}",
        palette.paint(format!("{:?}", res.elapsed), ansi::GREEN),
        palette.dim(format!("{:?}", totals.elapsed)),
    );
    println!();
}

/// Print the table in precedence order. The built-in set is also shown
/// grouped by category.
pub fn print_table(table: &TriggerTable, builtin: bool, color: bool) {
    let palette = ansi::Palette::new(color);

    if builtin {
        for category in categories() {
            println!("\n{}", palette.paint(format!("━━━ {} ━━━", category.name), ansi::GRAY));
            for (key, value) in category.symbols {
                let (policy, markup) = classify_key(key);
                println!("  {:<14} {}  {}", key, value, palette.dim(policy_label(policy, markup)));
            }
        }
        println!();
        return;
    }

    println!("\n{}", palette.paint(format!("━━━ Trigger table ({} rules) ━━━", table.len()), ansi::GRAY));
    for (idx, rule) in table.iter().enumerate() {
        print_rule(idx, rule, &palette);
    }
    for dead in table.shadowed() {
        let mark = palette.paint("⚠", ansi::YELLOW);
        println!("  {} rule {} is shadowed by rule {}", mark, dead.index, dead.shadowed_by);
    }
    println!();
}

fn print_rule(idx: usize, rule: &TriggerRule, palette: &ansi::Palette) {
    println!(
        "  {} {:<14} {} {}",
        palette.paint(format!("[{:>3}]", idx), ansi::GRAY),
        palette.paint(rule.key(), ansi::BLUE),
        palette.bold(rule.value()),
        palette.dim(policy_label(rule.policy(), rule.is_markup())),
    );
}

fn policy_label(policy: TriggerPolicy, markup: bool) -> &'static str {
    match (policy, markup) {
        (_, true) => "immediate, markup",
        (TriggerPolicy::Immediate, false) => "immediate",
        (TriggerPolicy::OnWhitespaceBoundary, false) => "on whitespace",
    }
}
