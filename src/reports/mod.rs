use cipherforge::caesar::CaesarAnalysis;
use cipherforge::cracker::CrackReport;
use cipherforge::error::CfResult;
use cipherforge::friedman::FriedmanReport;
use cipherforge::kasiski::KasiskiReport;
use cipherforge::profile::{AnalysisOrder, LetterProfile};
use cipherforge::vigenere::VigenereAnalysis;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, cols: std::ops::RangeInclusive<usize>) {
    for i in cols {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn print_json<T: Serialize>(value: &T) -> CfResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_frequency_table(name: &str, profile: &LetterProfile, order: AnalysisOrder) {
    println!("\nFreq Analysis: {} ({})", name, order);

    if profile.total() == 0 {
        println!("Couldn't analyse. No letters were counted.");
        return;
    }

    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Letter").add_attribute(Attribute::Bold),
        Cell::new("Count"),
        Cell::new("Frequency"),
    ]);

    for row in profile.entries(order) {
        table.add_row(vec![
            Cell::new(row.letter).set_alignment(CellAlignment::Center),
            Cell::new(row.count),
            Cell::new(format!("{:5.2} %", row.frequency)),
        ]);
    }
    align_right(&mut table, 1..=2);

    println!("{}", table);
    println!("Total number of letters: {}", profile.total());
    println!("Index of coincidence: {:.6}", profile.index_of_coincidence());
}

pub fn print_caesar_report(analysis: &CaesarAnalysis) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Shift"),
        Cell::new("Deviation"),
    ]);

    for (rank, score) in analysis.ranked.iter().enumerate() {
        let shift_cell = if score.shift == analysis.best_shift {
            Cell::new(score.shift).fg(Color::Green)
        } else {
            Cell::new(score.shift)
        };
        table.add_row(vec![
            Cell::new(rank + 1),
            shift_cell,
            Cell::new(format!("{:.2} %", score.deviation)),
        ]);
    }
    align_right(&mut table, 0..=2);

    println!("\n{}", table);
    println!(
        "The most congruent shift value appears to be: {}",
        analysis.best_shift
    );
}

pub fn print_kasiski_report(report: &KasiskiReport) {
    let mut words = new_table();
    words.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Word"),
        Cell::new("Offset"),
        Cell::new("Distance"),
    ]);
    for (i, (rep, dist)) in report
        .repeats
        .iter()
        .zip(report.distances.iter())
        .enumerate()
    {
        words.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&rep.word),
            Cell::new(rep.offset),
            Cell::new(dist.distance),
        ]);
    }
    align_right(&mut words, 2..=3);
    println!("\nFound {} repeating words.", report.repeats.len());
    println!("{}", words);

    let mut factors = new_table();
    factors.set_header(vec![
        Cell::new("Divisor").add_attribute(Attribute::Bold),
        Cell::new("Words"),
        Cell::new("Share"),
    ]);
    for f in &report.ranked {
        let divisor_cell = if report.candidates.contains(&f.divisor) {
            Cell::new(f.divisor).fg(Color::Green)
        } else {
            Cell::new(f.divisor)
        };
        factors.add_row(vec![
            divisor_cell,
            Cell::new(f.count),
            Cell::new(format!("{:.2} %", f.percentage)),
        ]);
    }
    align_right(&mut factors, 0..=2);
    println!("\n{}", factors);

    println!("[Kasiski] The most congruent key length: {}", report.best);
    println!("[Kasiski] Possible key lengths: {:?}", report.candidates);
}

pub fn print_friedman_report(report: &FriedmanReport) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Key Length").add_attribute(Attribute::Bold),
        Cell::new("Avg IoC"),
        Cell::new("Distance"),
    ]);
    for s in &report.averages {
        let len_cell = if s.key_length == report.best {
            Cell::new(s.key_length).fg(Color::Green)
        } else {
            Cell::new(s.key_length)
        };
        table.add_row(vec![
            len_cell,
            Cell::new(format!("{:.6}", s.average_ioc)),
            Cell::new(format!("{:.6}", (s.average_ioc - report.reference_ioc).abs())),
        ]);
    }
    align_right(&mut table, 0..=2);

    println!("\nReference IoC: {:.6}", report.reference_ioc);
    println!("{}", table);
    println!("[Friedman] The most congruent key length: {}", report.best);
}

pub fn print_vigenere_report(analysis: &VigenereAnalysis) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Column").add_attribute(Attribute::Bold),
        Cell::new("Shift"),
        Cell::new("Letter").fg(Color::Cyan),
        Cell::new("Deviation"),
        Cell::new("Runner-up"),
    ]);

    for (i, col) in analysis.columns.iter().enumerate() {
        let letter = analysis.keyword.as_str().chars().nth(i).unwrap_or('?');
        let runner_up = col
            .ranked
            .get(1)
            .map(|s| format!("{} ({:.2} %)", s.shift, s.deviation))
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(col.best_shift),
            Cell::new(letter).fg(Color::Cyan),
            Cell::new(format!("{:.2} %", col.ranked[0].deviation)),
            Cell::new(runner_up),
        ]);
    }
    align_right(&mut table, 0..=1);

    println!("\n{}", table);
    println!("The key is: {}", analysis.keyword);
}

pub fn print_crack_report(report: &CrackReport) {
    if let Some(k) = &report.kasiski {
        print_kasiski_report(k);
    }
    if let Some(f) = &report.friedman {
        print_friedman_report(f);
    }
    print_vigenere_report(&report.analysis);
}
