//! Writes a synthetic salary table with the same columns as the published
//! dataset, for working offline: `generate_sample [OUTPUT] [ROWS] [--seed N]`.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

#[derive(Serialize)]
struct Row<'a> {
    ano: i32,
    senioridade: &'a str,
    contrato: &'a str,
    tamanho_empresa: &'a str,
    cargo: &'a str,
    remoto: &'a str,
    residencia_iso3: &'a str,
    usd: f64,
}

/// Deterministic sampler: xoshiro256** for uniform draws, Box-Muller for
/// normally distributed salaries, modulo indexing for categorical columns.
struct Sampler {
    state: [u64; 4],
}

impl Sampler {
    fn seeded(seed: u64) -> Self {
        let mut state = [0u64; 4];
        let mut x = seed;
        for word in &mut state {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *word = x;
        }
        Sampler { state }
    }

    fn next_u64(&mut self) -> u64 {
        let s = &mut self.state;
        let out = s[1].wrapping_mul(5).rotate_left(7).wrapping_mul(9);
        let t = s[1] << 17;
        s[2] ^= s[0];
        s[3] ^= s[1];
        s[1] ^= s[2];
        s[0] ^= s[3];
        s[2] ^= t;
        s[3] = s[3].rotate_left(45);
        out
    }

    fn uniform(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.uniform().max(1e-15);
        let u2 = self.uniform();
        mean + std_dev * (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

const YEARS: [i32; 5] = [2020, 2021, 2022, 2023, 2024];
const CONTRACTS: [&str; 4] = ["integral", "contrato", "parcial", "freelancer"];
const SIZES: [&str; 3] = ["pequena", "media", "grande"];
const REMOTE: [&str; 3] = ["remoto", "hibrido", "presencial"];
const COUNTRIES: [&str; 8] = ["USA", "GBR", "CAN", "DEU", "ESP", "IND", "BRA", "FRA"];

/// (seniority, salary multiplier)
const SENIORITY: [(&str, f64); 4] = [
    ("junior", 0.6),
    ("pleno", 0.9),
    ("senior", 1.2),
    ("executivo", 1.6),
];

/// (role, base salary in USD)
const ROLES: [(&str, f64); 10] = [
    ("Data Scientist", 120_000.0),
    ("Data Engineer", 125_000.0),
    ("Data Analyst", 85_000.0),
    ("Machine Learning Engineer", 145_000.0),
    ("Analytics Engineer", 115_000.0),
    ("Research Scientist", 150_000.0),
    ("Data Architect", 155_000.0),
    ("Business Intelligence Analyst", 90_000.0),
    ("Applied Scientist", 160_000.0),
    ("Head of Data", 180_000.0),
];

/// Write a synthetic salary table with the published column layout.
#[derive(Debug, Parser)]
#[command(name = "generate_sample", about)]
struct Args {
    /// Output CSV path.
    #[arg(default_value = "sample_salaries.csv")]
    output: PathBuf,

    /// Number of records to generate.
    #[arg(default_value_t = 2000)]
    rows: usize,

    /// Sampler seed; the same seed always yields the same table.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn write_rows<W: Write>(writer: &mut csv::Writer<W>, rows: usize, seed: u64) -> csv::Result<()> {
    let mut rng = Sampler::seeded(seed);
    for _ in 0..rows {
        let &(seniority, factor) = rng.pick(&SENIORITY);
        let &(role, base) = rng.pick(&ROLES);
        let country = *rng.pick(&COUNTRIES);
        let country_factor = if country == "USA" { 1.2 } else { 0.7 };
        let usd = rng
            .normal(base * factor * country_factor, base * 0.15)
            .max(15_000.0)
            .round();

        writer.serialize(Row {
            ano: *rng.pick(&YEARS),
            senioridade: seniority,
            contrato: *rng.pick(&CONTRACTS),
            tamanho_empresa: *rng.pick(&SIZES),
            cargo: role,
            remoto: *rng.pick(&REMOTE),
            residencia_iso3: country,
            usd,
        })?;
    }
    writer.flush()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    write_rows(&mut writer, args.rows, args.seed)?;

    println!("Wrote {} salary records to {}", args.rows, args.output.display());
    Ok(())
}
