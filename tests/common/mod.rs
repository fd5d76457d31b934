//! Shared workbook fixtures for the integration and CLI tests.

#![allow(dead_code)]

use rust_xlsxwriter::*;

/// Write a header row of strings starting at column 0 (empty labels are skipped)
fn write_header(worksheet: &mut Worksheet, labels: &[&str]) -> Result<(), XlsxError> {
    for (col, label) in labels.iter().enumerate() {
        if !label.is_empty() {
            worksheet.write_string(0, col as u16, *label)?;
        }
    }
    Ok(())
}

/// Write a lookup sheet: e-mail in column C, value in column E (A and B stay empty)
fn write_lookup(worksheet: &mut Worksheet, entries: &[(&str, &str)]) -> Result<(), XlsxError> {
    worksheet.write_string(0, 2, "Email")?;
    worksheet.write_string(0, 4, "Wartość")?;
    for (i, (email, value)) in entries.iter().enumerate() {
        let row = i as u32 + 1;
        worksheet.write_string(row, 2, *email)?;
        worksheet.write_string(row, 4, *value)?;
    }
    Ok(())
}

/// Generate the full roster workbook
///
/// Sheets: Agile, Agile-daty, Agile-tematy, Narzędzia, Narzędzia-daty, Narzędzia-tematy
///
/// Agile roster (A: name, B: surname, C: id, D: e-mail, E: group, F: English):
///
/// | row | name  | surname   | id    | e-mail       | English | attendance |
/// |-----|-------|-----------|-------|--------------|---------|------------|
/// | 1   | Anna  | Nowak     | 12345 | anna@uni.pl  | No      | G, J       |
/// | 2   | John  | Smith     | 10001 | john@uni.pl  | Yes     | H          |
/// | 3   | Ewa   | Lis       |       | ewa@uni.pl   |         | G          |
/// | 4   | Piotr | Zieliński | 20002 | piotr@uni.pl | no      |            |
///
/// Header G and H are text dates, I is a real date cell, J is "Lab".
pub fn generate_roster_workbook() -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    {
        let agile = workbook.add_worksheet();
        agile.set_name("Agile")?;
        write_header(
            agile,
            &[
                "Imię",
                "Nazwisko",
                "Nr indeksu",
                "Email",
                "Grupa",
                "English",
                "09.10.2025",
                "16.10.2025",
            ],
        )?;
        agile.write_datetime_with_format(
            0,
            8,
            &ExcelDateTime::from_ymd(2025, 10, 23)?,
            &date_format,
        )?;
        agile.write_string(0, 9, "Lab")?;

        agile.write_string(1, 0, "Anna")?;
        agile.write_string(1, 1, "Nowak")?;
        agile.write_number(1, 2, 12345)?;
        agile.write_string(1, 3, "anna@uni.pl")?;
        agile.write_string(1, 4, "g1")?;
        agile.write_string(1, 5, "No")?;
        agile.write_number(1, 6, 1)?;
        agile.write_string(1, 9, "x")?;

        agile.write_string(2, 0, "John")?;
        agile.write_string(2, 1, "Smith")?;
        agile.write_number(2, 2, 10001)?;
        agile.write_string(2, 3, "john@uni.pl")?;
        agile.write_string(2, 4, "g1")?;
        agile.write_string(2, 5, "Yes")?;
        agile.write_number(2, 7, 1)?;

        agile.write_string(3, 0, "Ewa")?;
        agile.write_string(3, 1, "Lis")?;
        agile.write_string(3, 3, "ewa@uni.pl")?;
        agile.write_number(3, 6, 1)?;

        agile.write_string(4, 0, "Piotr")?;
        agile.write_string(4, 1, "Zieliński")?;
        agile.write_number(4, 2, 20002)?;
        agile.write_string(4, 3, "piotr@uni.pl")?;
        agile.write_string(4, 4, "g2")?;
        agile.write_string(4, 5, "no")?;
        agile.write_number(4, 20, 0)?;
    }

    {
        let dates = workbook.add_worksheet();
        dates.set_name("Agile-daty")?;
        write_lookup(
            dates,
            &[
                ("anna@uni.pl", "09.10.2025"),
                ("piotr@uni.pl", "2025-10-23"),
                ("ewa@uni.pl", "po świętach"),
            ],
        )?;
        // John's date is a real date cell
        dates.write_string(4, 2, "john@uni.pl")?;
        dates.write_datetime_with_format(
            4,
            4,
            &ExcelDateTime::from_ymd(2025, 10, 23)?,
            &date_format,
        )?;
    }

    {
        let titles = workbook.add_worksheet();
        titles.set_name("Agile-tematy")?;
        write_lookup(
            titles,
            &[
                ("anna@uni.pl", "  Intro to Agile "),
                ("piotr@uni.pl", "Kanban"),
                ("john@uni.pl", "Scrum in practice"),
                ("ewa@uni.pl", "Retrospectives"),
            ],
        )?;
    }

    {
        let tools = workbook.add_worksheet();
        tools.set_name("Narzędzia")?;
        write_header(
            tools,
            &[
                "Imię",
                "Nazwisko",
                "Nr indeksu",
                "Email",
                "Grupa",
                "English",
                "Lab 1",
                "Lab 2",
            ],
        )?;
        tools.write_string(1, 0, "Marek")?;
        tools.write_string(1, 1, "Wójcik")?;
        tools.write_number(1, 2, 30003)?;
        tools.write_string(1, 3, "marek@uni.pl")?;
        tools.write_number(1, 6, 1)?;
    }

    {
        let dates = workbook.add_worksheet();
        dates.set_name("Narzędzia-daty")?;
        write_lookup(dates, &[("marek@uni.pl", "2025/10/16")])?;
    }

    {
        let titles = workbook.add_worksheet();
        titles.set_name("Narzędzia-tematy")?;
        write_lookup(titles, &[("marek@uni.pl", "Git")])?;
    }

    workbook.save_to_buffer()
}

/// Generate a workbook with only the Agile roster sheet (no lookup sheets)
pub fn generate_roster_without_lookups() -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let agile = workbook.add_worksheet();
    agile.set_name("Agile")?;
    write_header(agile, &["Imię", "Nazwisko", "Nr indeksu", "Email"])?;
    agile.write_string(1, 0, "Anna")?;
    agile.write_string(1, 3, "anna@uni.pl")?;
    workbook.save_to_buffer()
}

/// The expected Agile schedule paragraphs for the default configuration
pub fn expected_agile_schedule() -> String {
    let mut md = String::new();
    md.push_str("09.10.2025 – Wykład 1: **Intro to Agile** – *Anna Nowak* (wykład otwarty)\n\n");
    md.push_str("16.10.2025 - **Wykład nie odbędzie się**\n\n");
    md.push_str("23.10.2025 – Lecture 2: **Scrum in practice** – *John Smith* (open lecture) *Lecture will be held in English*\n\n");
    md.push_str("23.10.2025 – Wykład 3: **Kanban** – *Piotr Zieliński* (wykład otwarty)\n\n");
    for date in [
        "30.10.2025",
        "06.11.2025",
        "13.11.2025",
        "20.11.2025",
        "27.11.2025",
        "04.12.2025",
        "11.12.2025",
        "18.12.2025",
        "25.12.2025",
        "01.01.2026",
        "08.01.2026",
        "15.01.2026",
        "22.01.2026",
        "29.01.2026",
        "05.02.2026",
    ] {
        md.push_str(&format!("{} - **Wykład nie odbędzie się**\n\n", date));
    }
    md
}
