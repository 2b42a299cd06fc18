//! Sum command implementation.

use crate::utils::create_progress_bar;
use oxicrc_core::{OxiCrcError, parse_crc};
use oxicrc_kernels::{Crc32cKernel, DefaultKernel, Kernel};
use std::fs;
use std::path::{Path, PathBuf};

/// Options for checksumming files.
pub struct SumOptions<'a> {
    pub kernel: Option<&'a str>,
    pub seed: Option<&'a str>,
    pub expect: Option<&'a str>,
    pub progress: bool,
    pub verbose: bool,
}

/// CRC-32C of one whole file.
pub fn sum_file(path: &Path, kernel: &Kernel, seed: u32) -> Result<u32, OxiCrcError> {
    let data = fs::read(path)?;
    Ok(kernel.checksum(seed, &data))
}

pub fn cmd_sum(files: &[PathBuf], options: &SumOptions) -> Result<(), Box<dyn std::error::Error>> {
    if files.is_empty() {
        return Err("no input files".into());
    }

    let kernel = oxicrc_kernels::find(options.kernel.unwrap_or(DefaultKernel::NAME))?;
    let seed = options.seed.map(parse_crc).transpose()?.unwrap_or(0);
    let expect = options.expect.map(parse_crc).transpose()?;

    if options.verbose {
        eprintln!("kernel: {}, seed: 0x{:08x}", kernel.name, seed);
    }

    let pb = create_progress_bar(files.len() as u64, options.progress);
    let mut lines = Vec::with_capacity(files.len());
    let mut mismatch = None;

    for path in files {
        pb.set_message(path.display().to_string());
        let crc = sum_file(path, kernel, seed)?;
        lines.push(format!("{:08x}  {}", crc, path.display()));

        if let Some(expected) = expect {
            if crc != expected && mismatch.is_none() {
                mismatch = Some(OxiCrcError::crc_mismatch(
                    path.display().to_string(),
                    expected,
                    crc,
                ));
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    for line in &lines {
        println!("{}", line);
    }

    match mismatch {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("oxicrc-{}-{}", std::process::id(), name));
        fs::write(&path, contents).expect("write temp file");
        path
    }

    #[test]
    fn test_sum_file() {
        let path = temp_file("check.txt", b"123456789");
        let kernel = oxicrc_kernels::find("crc32c_small_table").unwrap();
        assert_eq!(sum_file(&path, kernel, 0).unwrap(), 0xE3069283);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_sum_expect() {
        let path = temp_file("expect.txt", b"123456789");
        let files = vec![path.clone()];
        let mut options = SumOptions {
            kernel: None,
            seed: None,
            expect: Some("0xe3069283"),
            progress: false,
            verbose: false,
        };
        assert!(cmd_sum(&files, &options).is_ok());
        options.expect = Some("0x00000000");
        assert!(cmd_sum(&files, &options).is_err());
        options.expect = Some("not-a-crc");
        assert!(cmd_sum(&files, &options).is_err());
        options.expect = Some("e3069283");
        assert!(cmd_sum(&files, &options).is_err());
        options.expect = Some("3808858755");
        assert!(cmd_sum(&files, &options).is_ok());
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file() {
        let kernel = oxicrc_kernels::find("crc32c_table").unwrap();
        let err = sum_file(Path::new("/nonexistent/oxicrc/input"), kernel, 0).unwrap_err();
        assert!(matches!(err, OxiCrcError::Io(_)));
    }
}
