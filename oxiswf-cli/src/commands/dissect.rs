//! Dissect command implementation.

use crate::decode::DecodeRequest;
use crate::input::InputFile;
use crate::tree::ToTree;
use crate::utils::format_bits;
use oxiswf_core::FileElement;
use serde::Serialize;
use std::path::Path;

/// JSON output structure for dissect.
#[derive(Debug, Serialize)]
struct DissectOutput<'a, T: Serialize> {
    file: String,
    structure: &'static str,
    shape_version: u8,
    offset: usize,
    bit_length: u64,
    consumed_bits: u64,
    value: &'a T,
}

pub fn cmd_dissect(
    file: &Path,
    request: &DecodeRequest,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = InputFile::open(file)?;
    let dissection = request.decode(input.bytes())?;
    let root = request.structure.root_name();

    if json {
        let output = DissectOutput {
            file: input.path().display().to_string(),
            structure: root,
            shape_version: request.version.number(),
            offset: request.offset,
            bit_length: dissection.value.bit_length(),
            consumed_bits: dissection.consumed_bits,
            value: &dissection.value,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let tree = dissection.value.to_tree(root);

    println!("File: {}", input.path().display());
    println!("Structure: {} ({})", root, request.version);
    println!("Offset: {:#X}", request.offset);
    println!();
    print!("{}", tree);
    println!();
    println!("Elements: {}", tree.node_count());
    println!("Element bits: {}", format_bits(tree.bit_length));
    println!("Consumed: {}", format_bits(dissection.consumed_bits));

    Ok(())
}
