//! An example training on the classic `weather` dataset
use branchwise::sampler::train_test_split;
use branchwise::{DecisionTreeClassifier, Record, Value};
use std::error::Error;
use std::fs::File;
use std::io::BufReader;

fn main() -> Result<(), Box<dyn Error>> {
    let feature_names = ["outlook", "humidity", "windy"];
    let target_name = "play";

    let file = File::open("resources/weather.csv")?;
    let reader = BufReader::new(file);
    let mut csv_reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let mut dataset: Vec<Record> = Vec::new();
    for result in csv_reader.records() {
        let row = result?;
        let mut record = Record::new();
        for (header, field) in headers.iter().zip(row.iter()) {
            // booleans come out of the csv as text
            let value = match field {
                "true" => Value::Bool(true),
                "false" => Value::Bool(false),
                other => Value::Str(other.to_string()),
            };
            record.insert(header.to_string(), value);
        }
        dataset.push(record);
    }

    let features: Vec<String> = feature_names.iter().map(|s| s.to_string()).collect();
    let model = DecisionTreeClassifier::fit(dataset.clone(), target_name, features.clone())?;

    println!("{}", model.tree);

    let overcast_day = branchwise::record! {
        "outlook" => "Overcast",
        "humidity" => "High",
        "windy" => false,
    };
    println!("Overcast/High/calm day: play = {}", model.predict(&overcast_day));
    println!("Training accuracy: {:.3}", model.evaluate(&dataset)?);

    // Hold out part of the table to see how the tree generalizes.
    let (train, test) = train_test_split(&dataset, 0.7, 42);
    if train.is_empty() || test.is_empty() {
        println!("Holdout split left one side empty; try another seed.");
    } else {
        let holdout_model = DecisionTreeClassifier::fit(train, target_name, features)?;
        println!("Holdout accuracy: {:.3}", holdout_model.evaluate(&test)?);
    }

    Ok(())
}
