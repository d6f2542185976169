//! Writes a deterministic sample dataset for trying the engine by hand.
//!
//! Usage: `generate_sample [OUTPUT_STEM]` → `OUTPUT_STEM.parquet` and
//! `OUTPUT_STEM.csv` (default stem `sample_data`).

use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

use rusty_subsets::data::loader::load_file;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let stem = std::env::args().nth(1).unwrap_or_else(|| "sample_data".to_string());
    let mut rng = SimpleRng::new(42);

    let products = ["tornillo", "tuerca", "arandela", "clavo", "perno"];
    let materials = ["acero", "inox", "bronce", "zinc"];
    let sizes = ["m4", "m6", "m8", "m10"];
    let categories = ["ferreteria", "industrial", "hogar"];

    let mut ids: Vec<i64> = Vec::new();
    let mut descriptions: Vec<String> = Vec::new();
    let mut category_col: Vec<&str> = Vec::new();
    let mut prices: Vec<f64> = Vec::new();

    for id in 1..=200 {
        let description = format!(
            "{} {} {} x{}",
            rng.pick(&products),
            rng.pick(&materials),
            rng.pick(&sizes),
            1 + rng.next_u64() % 100
        );
        ids.push(id);
        descriptions.push(description);
        category_col.push(rng.pick(&categories));
        prices.push((rng.next_f64() * 5000.0).round() / 100.0);
    }

    let schema = Arc::new(Schema::new(vec![
        Field::new("id", DataType::Int64, false),
        Field::new("descripcion", DataType::Utf8, false),
        Field::new("categoria", DataType::Utf8, false),
        Field::new("precio", DataType::Float64, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from(ids.clone())),
            Arc::new(StringArray::from(
                descriptions.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
            )),
            Arc::new(StringArray::from(category_col.clone())),
            Arc::new(Float64Array::from(prices.clone())),
        ],
    )
    .context("building record batch")?;

    // Write Parquet
    let parquet_path = format!("{stem}.parquet");
    let file = std::fs::File::create(&parquet_path).context("creating parquet output")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing batch")?;
    writer.close().context("closing parquet writer")?;

    // Write CSV
    let csv_path = format!("{stem}.csv");
    let mut csv_writer = csv::Writer::from_path(&csv_path).context("creating CSV output")?;
    csv_writer.write_record(["id", "descripcion", "categoria", "precio"])?;
    for i in 0..ids.len() {
        csv_writer.write_record([
            ids[i].to_string(),
            descriptions[i].clone(),
            category_col[i].to_string(),
            prices[i].to_string(),
        ])?;
    }
    csv_writer.flush().context("flushing CSV output")?;

    // Read both back through the loader.
    for path in [&parquet_path, &csv_path] {
        let table = load_file(std::path::Path::new(path))?;
        println!("Wrote {} rows to {path}", table.len());
    }

    Ok(())
}
