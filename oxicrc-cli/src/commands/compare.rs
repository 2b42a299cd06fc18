//! Compare command implementation.

use crate::utils::format_result;
use oxicrc_core::OxiCrcError;
use oxicrc_core::selftest::xorshift_bytes;
use oxicrc_kernels::KERNELS;

pub fn cmd_compare(len: usize, seed: u32, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let data = xorshift_bytes(len, seed);
    let Some((reference, rest)) = KERNELS.split_first() else {
        return Err("no kernels registered".into());
    };

    let want = reference.checksum(0, &data);
    if verbose {
        println!("# {} bytes, xorshift32 seed {}", len, seed);
    }
    println!("{}", format_result(reference.name, want));

    let mut disagree = Vec::new();
    for kernel in rest {
        let crc = kernel.checksum(0, &data);
        if crc == want {
            println!("{}", format_result(kernel.name, crc));
        } else {
            println!("{}  MISMATCH", format_result(kernel.name, crc));
            disagree.push(OxiCrcError::crc_mismatch(kernel.name, want, crc));
        }
    }

    if disagree.is_empty() {
        println!("All {} kernels agree.", KERNELS.len());
        Ok(())
    } else {
        eprintln!(
            "{} of {} kernels disagree with {}",
            disagree.len(),
            KERNELS.len(),
            reference.name
        );
        Err(disagree.remove(0).into())
    }
}
