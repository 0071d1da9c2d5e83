//! Terminal UI utilities.
//!
//! A small box-drawing table for `cmx info`. Columns size themselves
//! to content and the widest column gives way when the terminal is too
//! narrow.

use colored::*;
use std::cmp;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        if row.len() == self.headers.len() {
            self.rows.push(row);
        }
    }

    pub fn print(&self) {
        if self.headers.is_empty() {
            return;
        }

        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .map(|h| console::measure_text_width(h))
            .collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = cmp::max(widths[i], console::measure_text_width(cell));
            }
        }

        // Shrink the widest column until the table fits the terminal.
        let (_, term_width) = console::Term::stdout().size();
        let overhead = 3 + 3 * widths.len();
        while widths.iter().sum::<usize>() + overhead > term_width as usize {
            let widest = widths
                .iter()
                .enumerate()
                .max_by_key(|(_, w)| **w)
                .map(|(i, _)| i)
                .unwrap_or(0);
            if widths[widest] <= 8 {
                break;
            }
            widths[widest] -= 1;
        }

        let sep = |left: &str, mid: &str, right: &str| {
            let mut line = String::from("  ");
            line.push_str(left);
            for (i, w) in widths.iter().enumerate() {
                line.push_str(&"─".repeat(w + 2));
                line.push_str(if i + 1 < widths.len() { mid } else { right });
            }
            line
        };

        println!("{}", sep("┌", "┬", "┐"));
        print_row(&self.headers, &widths, true);
        println!("{}", sep("├", "┼", "┤"));
        for row in &self.rows {
            print_row(row, &widths, false);
        }
        println!("{}", sep("└", "┴", "┘"));
    }
}

fn print_row(cells: &[String], widths: &[usize], bold: bool) {
    print!("  │");
    for (i, cell) in cells.iter().enumerate() {
        let shown = console::truncate_str(cell, widths[i], "...");
        let pad = widths[i].saturating_sub(console::measure_text_width(&shown));
        let shown = if bold {
            shown.bold().to_string()
        } else {
            shown.to_string()
        };
        print!(" {}{} │", shown, " ".repeat(pad));
    }
    println!();
}
