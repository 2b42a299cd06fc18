//! Self-test command implementation.

use crate::utils::{format_result, select_kernels};
use clap::ValueEnum;
use oxicrc_core::OxiCrcError;
use oxicrc_core::selftest::SelfTestConfig;
use serde::Serialize;

/// Which self-test vectors to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum VectorSize {
    /// 512-byte vector
    Small,
    /// 4096-byte vector
    Large,
    /// Both vectors
    #[default]
    All,
}

impl VectorSize {
    fn configs(self) -> &'static [SelfTestConfig] {
        match self {
            Self::Small => &[SelfTestConfig::SMALL],
            Self::Large => &[SelfTestConfig::LARGE],
            Self::All => &SelfTestConfig::ALL,
        }
    }
}

/// JSON serializable result of one kernel on one vector.
#[derive(Debug, Serialize)]
struct CheckJson {
    kernel: &'static str,
    vector: &'static str,
    len: usize,
    crc: String,
    expected: String,
    ok: bool,
}

pub fn cmd_check(
    kernel: Option<&str>,
    size: VectorSize,
    json: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let kernels = select_kernels(kernel)?;
    let mut results = Vec::new();
    let mut first_failure: Option<OxiCrcError> = None;

    for cfg in size.configs() {
        let data = cfg.generate();
        if verbose && !json {
            println!(
                "# {} vector: {} bytes, seed {}, expect 0x{:08x}",
                cfg.name, cfg.len, cfg.seed, cfg.expected
            );
        }

        for k in &kernels {
            let crc = k.checksum(0, &data);
            let outcome = cfg.check(k.name, crc);
            let ok = outcome.is_ok();

            if json {
                results.push(CheckJson {
                    kernel: k.name,
                    vector: cfg.name,
                    len: cfg.len,
                    crc: format!("0x{:08x}", crc),
                    expected: format!("0x{:08x}", cfg.expected),
                    ok,
                });
            } else if ok {
                println!("{}", format_result(k.name, crc));
            } else {
                println!("{}  MISMATCH", format_result(k.name, crc));
            }

            if let Err(e) = outcome {
                first_failure.get_or_insert(e);
            }
        }

        if verbose && !json {
            println!();
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    }

    match first_failure {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}
