use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use mechforge::knowledge::{KnowledgeBase, UnitData};
use mechforge::scorer::{BoardRow, ScoredCandidate, ThreatLevel};

fn tier_cell(kb: &KnowledgeBase, name: &str) -> Cell {
    let tier = kb.tier_of(name);
    let cell = Cell::new(tier.tag()).set_alignment(CellAlignment::Center);
    match tier.tag() {
        "S" => cell.fg(Color::Red),
        "A" => cell.fg(Color::Yellow),
        "B" => cell.fg(Color::Blue),
        _ => cell,
    }
}

/// Counter or vulnerability board: who answers the given roster side.
pub fn print_board(title: &str, rows: &[BoardRow], kb: &KnowledgeBase) {
    println!("\n{}", title);
    if rows.is_empty() {
        println!("  (nothing listed)");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec![
        Cell::new("Unit").add_attribute(Attribute::Bold),
        Cell::new("Tier"),
        Cell::new("Answers"),
        Cell::new("Against"),
    ]);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.name),
            tier_cell(kb, &row.name),
            Cell::new(row.count).set_alignment(CellAlignment::Right),
            Cell::new(row.covered.join(", ")),
        ]);
    }
    println!("{}", table);
}

pub fn print_unit_list(title: &str, units: &[String]) {
    println!("\n{}", title);
    if units.is_empty() {
        println!("  Enemy has an answer for everything here.");
        return;
    }
    for u in units {
        println!("  - {}", u);
    }
}

pub fn print_avoid_list(rows: &[BoardRow]) {
    println!("\n🚫 Avoid for now");
    if rows.is_empty() {
        println!("  Enemy build does not strongly counter anything directly.");
        return;
    }
    for row in rows {
        let level = ThreatLevel::from_count(row.count);
        println!(
            "  - {} ({} – {} counters by current enemy build: {})",
            row.name,
            level.label(),
            row.count,
            row.covered.join(", ")
        );
    }
}

/// Ranked candidate table. Scores stay out of the table: they are
/// opaque ranking keys, surfaced only inside explanation text.
pub fn print_ranking(ranked: &[ScoredCandidate], top: usize, kb: &KnowledgeBase) {
    println!("\n🔮 Ranked suggestions");
    if ranked.is_empty() {
        println!("  (no units known)");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Unit").add_attribute(Attribute::Bold),
        Cell::new("Tier"),
        Cell::new("Action"),
        Cell::new("New"),
        Cell::new("Overlap"),
    ]);

    let shown = top.max(1).min(ranked.len());
    for (i, c) in ranked.iter().take(shown).enumerate() {
        table.add_row(vec![
            Cell::new(i + 1).set_alignment(CellAlignment::Right),
            Cell::new(&c.name),
            tier_cell(kb, &c.name),
            Cell::new(if c.in_build { "upgrade" } else { "add" }),
            Cell::new(c.coverage.new_coverage.len()).set_alignment(CellAlignment::Right),
            Cell::new(c.coverage.overlap_coverage.len()).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", table);
}

pub fn print_recommendations(ranked: &[ScoredCandidate], top: usize) {
    let labels = ["Primary", "Secondary"];
    for (candidate, label) in ranked.iter().take(top.max(1).min(2)).zip(labels) {
        println!("\n{} recommendation: {}", label, candidate.name);
        for line in &candidate.explanations {
            println!("  • {}", line);
        }
    }
}

pub fn print_chaff_advisory(staple: &ScoredCandidate) {
    println!("\n🐜 Round-1 chaff staple: {}", staple.name);
    for line in &staple.explanations {
        println!("  • {}", line);
    }
}

pub fn print_unit_card(unit: &UnitData) {
    println!("\n=== {} ===", unit.name);
    let tag = unit.tier.tag();
    if !tag.is_empty() {
        println!("Tier: {}", tag);
    }
    if unit.unlock_cost > 0 {
        println!("Cost: {} (+{} unlock)", unit.cost, unit.unlock_cost);
    } else {
        println!("Cost: {}", unit.cost);
    }
    if unit.is_titan {
        println!("Class: titan");
    }
    if unit.is_giant {
        println!("Class: giant");
    }

    let mut used: Vec<&str> = unit.used_against.iter().map(|s| s.as_str()).collect();
    used.sort();
    let mut countered: Vec<&str> = unit.countered_by.iter().map(|s| s.as_str()).collect();
    countered.sort();
    println!(
        "Used against: {}",
        if used.is_empty() { "—".to_string() } else { used.join(", ") }
    );
    println!(
        "Countered by: {}",
        if countered.is_empty() { "—".to_string() } else { countered.join(", ") }
    );
}
