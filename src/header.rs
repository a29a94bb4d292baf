//! Firmware secrets header emitter.
//!
//! The fragment is compiled into fob firmware: an include guard, exactly one
//! of the two pairing capability flags set to 1, and optionally an
//! initializer for the firmware-declared `ENTROPY` type (a 1024-byte array
//! named `S_ENTROPY`).

/// Must match `sizeof(ENTROPY)` in the fob firmware.
pub const ENTROPY_LEN: usize = 0x400;

const GUARD: &str = "__FOB_SECRETS__";

pub fn emit_fob_header(paired: bool, entropy: Option<&[u8; ENTROPY_LEN]>) -> String {
    let (pfob, ufob) = if paired { (1, 0) } else { (0, 1) };

    let mut out = String::new();
    out.push_str(&format!("#ifndef {GUARD}\n"));
    out.push_str(&format!("#define {GUARD}\n\n"));
    out.push_str(&format!("#define OG_PFOB {pfob}\n"));
    out.push_str(&format!("#define OG_UFOB {ufob}\n"));
    if let Some(entropy) = entropy {
        out.push_str("\nconst ENTROPY S_ENTROPY = {.data = {\n");
        for chunk in entropy.chunks(16) {
            let line: Vec<String> = chunk.iter().map(|b| format!("0x{b:02x}")).collect();
            out.push_str("    ");
            out.push_str(&line.join(", "));
            out.push_str(",\n");
        }
        out.push_str("}};\n");
    }
    out.push_str("#endif\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_are_mutually_exclusive() {
        let paired = emit_fob_header(true, None);
        assert!(paired.contains("#define OG_PFOB 1"));
        assert!(paired.contains("#define OG_UFOB 0"));

        let unpaired = emit_fob_header(false, None);
        assert!(unpaired.contains("#define OG_PFOB 0"));
        assert!(unpaired.contains("#define OG_UFOB 1"));
    }

    #[test]
    fn test_include_guard_is_balanced() {
        let header = emit_fob_header(true, Some(&[0u8; ENTROPY_LEN]));
        assert!(header.starts_with("#ifndef __FOB_SECRETS__\n#define __FOB_SECRETS__\n"));
        assert!(header.ends_with("#endif\n"));
        assert_eq!(header.matches("#ifndef").count(), 1);
        assert_eq!(header.matches("#endif").count(), 1);
    }

    #[test]
    fn test_entropy_array_has_1024_byte_literals() {
        let entropy = [0xA5u8; ENTROPY_LEN];
        let header = emit_fob_header(false, Some(&entropy));
        assert!(header.contains("const ENTROPY S_ENTROPY"));
        assert_eq!(
            header.matches("0x").count(),
            ENTROPY_LEN,
            "every entropy byte must appear exactly once"
        );
        assert!(header.contains("0xa5"));
    }

    #[test]
    fn test_no_entropy_block_when_omitted() {
        let header = emit_fob_header(true, None);
        assert!(!header.contains("S_ENTROPY"));
        assert_eq!(header.matches("0x").count(), 0);
    }
}
