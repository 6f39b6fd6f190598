/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

//! C header emission.
//!
//! The layout is byte-for-byte what the kernel build already consumes,
//! including the `, ` after the last pixel and the missing line wrap.

use std::io::{self, Write};

use crate::config::SymbolName;
use crate::convert::PackedImage;

/// Writes the header for `image` under `symbol` into `w`.
pub fn write_header<W: Write>(w: &mut W, symbol: &SymbolName, image: &PackedImage) -> io::Result<()> {
    let guard = symbol.guard();

    writeln!(w, "#ifndef {guard}")?;
    writeln!(w, "#define {guard}")?;
    writeln!(w)?;
    writeln!(w, "#include <stdint.h>")?;
    writeln!(w)?;
    writeln!(w, "const uint32_t {symbol}_width = {};", image.width)?;
    writeln!(w, "const uint32_t {symbol}_height = {};", image.height)?;
    writeln!(w, "const uint32_t {symbol}_data[] = {{")?;

    for argb in &image.pixels {
        write!(w, "0x{argb:08X}, ")?;
    }

    writeln!(w)?;
    writeln!(w, "}};")?;
    writeln!(w)?;
    writeln!(w, "#endif")?;

    Ok(())
}

/// In-memory variant of [`write_header`].
pub fn render_header(symbol: &SymbolName, image: &PackedImage) -> io::Result<String> {
    let mut buf = Vec::with_capacity(160 + image.pixels.len() * "0xFFFFFFFF, ".len());
    write_header(&mut buf, symbol, image)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icon() -> SymbolName {
        SymbolName::new("icon").unwrap()
    }

    #[test]
    fn test_two_pixel_header_is_exact() {
        let image = PackedImage {
            width: 2,
            height: 1,
            pixels: vec![0xFFFF0000, 0x8000FF00],
        };

        let expected = "#ifndef ICON_H\n\
                        #define ICON_H\n\
                        \n\
                        #include <stdint.h>\n\
                        \n\
                        const uint32_t icon_width = 2;\n\
                        const uint32_t icon_height = 1;\n\
                        const uint32_t icon_data[] = {\n\
                        0xFFFF0000, 0x8000FF00, \n\
                        };\n\
                        \n\
                        #endif\n";

        assert_eq!(render_header(&icon(), &image).unwrap(), expected);
    }

    #[test]
    fn test_hex_is_padded_and_uppercase() {
        let image = PackedImage {
            width: 3,
            height: 1,
            pixels: vec![0, 0x00ab00cd, 0xdeadbeef],
        };
        let text = render_header(&icon(), &image).unwrap();
        assert!(text.contains("0x00000000, 0x00AB00CD, 0xDEADBEEF, \n};"));
    }

    #[test]
    fn test_one_literal_per_pixel() {
        let image = PackedImage {
            width: 4,
            height: 3,
            pixels: vec![0xFF000000; 12],
        };
        let text = render_header(&SymbolName::new("logo").unwrap(), &image).unwrap();

        assert!(text.contains("const uint32_t logo_width = 4;\n"));
        assert!(text.contains("const uint32_t logo_height = 3;\n"));
        assert_eq!(text.matches("0xFF000000, ").count(), 12);
        assert!(text.starts_with("#ifndef LOGO_H\n#define LOGO_H\n"));
        assert!(text.ends_with("};\n\n#endif\n"));
    }

    #[test]
    fn test_write_header_propagates_io_errors() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("disk full"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let image = PackedImage {
            width: 1,
            height: 1,
            pixels: vec![0],
        };
        let err = write_header(&mut Broken, &icon(), &image).unwrap_err();
        assert_eq!(err.to_string(), "disk full");
    }
}
