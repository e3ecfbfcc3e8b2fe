use crate::config::ImportConfig;
use crate::decode::{AbbreviationDecoder, CategoryClassifier};
use crate::error::ImportResult;
use crate::pipeline::{ImportSummary, Pipeline};
use crate::sink::{MemorySink, SqliteSink};
use crate::source::{self, WorkbookSource};
use crate::types::TireRecord;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

/// Execute the import command. With `output`, a dry run also writes the
/// decoded records to that file as YAML.
pub fn import(
    config: ImportConfig,
    dry_run: bool,
    output: Option<PathBuf>,
    strict: bool,
    verbose: bool,
) -> ImportResult<ImportSummary> {
    println!("{}", "🛞 Tire Import - Price list".bold().green());
    println!("   Input:    {}", config.input.display());
    println!("   Sheet:    {}", config.sheet);
    if dry_run {
        println!("{}", "📋 DRY RUN MODE - Nothing will be written\n".yellow());
    } else {
        println!(
            "   Database: {} (table {})\n",
            config.database.display(),
            config.table
        );
    }

    let pipeline = Pipeline::from_config(&config)?.strict(strict);

    if verbose {
        println!("{}", "📖 Reading workbook...".cyan());
    }
    let source = WorkbookSource::open(&config.input, &config.sheet)?;

    let summary = if dry_run {
        let mut sink = MemorySink::new();
        let summary = pipeline.run(&source, &mut sink)?;
        if verbose {
            for record in &sink.records {
                print_record(record);
            }
        }
        if let Some(output) = output {
            if verbose {
                println!("{}", "💾 Writing YAML file...".cyan());
            }
            let yaml_string = serde_yaml::to_string(&sink.records)?;
            fs::write(&output, yaml_string)?;
            println!("   YAML file: {}", output.display());
        }
        summary
    } else {
        if verbose {
            println!("{}", "💾 Writing records...".cyan());
        }
        let mut sink = SqliteSink::open(&config.database, &config.schema())?;
        pipeline.run(&source, &mut sink)?
    };

    print_summary(&summary);
    Ok(summary)
}

/// Execute the decode command
pub fn decode(texts: Vec<String>, yaml: bool) -> ImportResult<()> {
    let decoder = AbbreviationDecoder::new()?;

    if yaml {
        let decoded: Vec<_> = texts.iter().map(|text| decoder.decode(text)).collect();
        print!("{}", serde_yaml::to_string(&decoded)?);
        return Ok(());
    }

    for text in texts {
        let a = decoder.decode(&text);
        println!("{}", text.bold().bright_blue());
        println!("   width:        {}", a.width);
        println!("   height:       {}", a.height);
        println!("   diameter:     {}", a.diameter);
        println!("   brand_name:   {}", a.brand_name);
        println!("   model_name:   {}", a.model_name);
        println!("   weight_index: {}", a.weight_index);
        println!("   speed_index:  {}", a.speed_index);
        println!("   strengthened: {}", a.strengthened);
        println!("   is_studded:   {}", a.is_studded);
        println!("   additional:   {}", a.additional);
        println!();
    }

    Ok(())
}

/// Execute the classify command
pub fn classify(texts: Vec<String>) -> ImportResult<()> {
    let classifier = CategoryClassifier::new()?;

    for text in texts {
        println!("{} → {}", text, classifier.classify(&text));
    }

    Ok(())
}

/// Execute the sheets command
pub fn sheets(input: PathBuf) -> ImportResult<()> {
    println!("{}", "📄 Sheets".bold().green());
    println!("   File: {}\n", input.display());

    for name in source::sheet_names(&input)? {
        println!("   {}", name.bright_blue());
    }

    Ok(())
}

fn print_record(record: &TireRecord) {
    println!(
        "   {} {} {}/{} R{} {} {} {}{} {} {} {} | {} | {} | {} | {}",
        record.category.as_str().cyan(),
        record.season,
        record.width,
        record.height,
        record.diameter,
        record.brand_name,
        record.model_name,
        record.weight_index,
        record.speed_index,
        record.strengthened,
        if record.is_studded { "шип" } else { "" },
        record.additional,
        record.remainder,
        record.price,
        record.country,
        record.production_year,
    );
}

fn print_summary(summary: &ImportSummary) {
    match summary.header_row {
        Some(row) => {
            println!("{}", "✅ Import Complete!".bold().green());
            println!("   Header row:    {}", row + 1);
        }
        None => {
            println!("{}", "⚠️  Header row not found - nothing imported".yellow());
        }
    }
    println!("   Rows scanned:  {}", summary.rows_scanned);
    println!("   Skipped:       {}", summary.rows_before_header);
    println!("   Blank rows:    {}", summary.blank_rows);
    println!("   Records:       {}", summary.records.to_string().bold());
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
