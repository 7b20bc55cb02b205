//! Read-only views: helplines, tips, reports and the risk score.

use haven_core::Config;

use super::{api_client, runtime};

pub fn helplines(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let client = api_client(&Config::load()?)?;
    let helplines = runtime()?.block_on(client.helplines())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&helplines)?);
        return Ok(());
    }
    if helplines.is_empty() {
        println!("No helplines available.");
    }
    for h in &helplines {
        match &h.notes {
            Some(notes) if !notes.is_empty() => println!("{:<24} {:<12} {notes}", h.name, h.number),
            _ => println!("{:<24} {}", h.name, h.number),
        }
    }
    Ok(())
}

pub fn tips(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let client = api_client(&Config::load()?)?;
    let tips = runtime()?.block_on(client.tips())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tips)?);
        return Ok(());
    }
    for (i, tip) in tips.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", tip.title);
        println!("  {}", tip.body);
    }
    Ok(())
}

pub fn reports(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let client = api_client(&Config::load()?)?;
    let reports = runtime()?.block_on(client.reports())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        println!("{} reports", reports.len());
    }
    Ok(())
}

pub fn score(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let client = api_client(&Config::load()?)?;
    let level = runtime()?.block_on(client.risk_score())?;

    if json {
        println!("{}", serde_json::json!({ "score": level }));
    } else {
        println!("{level}");
    }
    Ok(())
}
