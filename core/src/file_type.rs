use core::fmt;

macro_rules! file_types {
    ($($variant:ident = $code:literal => $ext:literal,)*) => {
        /// Source image format recorded for a catalog entry.
        #[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
        pub enum FileType {
            $($variant,)*
            Unknown(u32),
        }

        impl FileType {
            pub fn from_code(code: u32) -> Self {
                match code {
                    $($code => FileType::$variant,)*
                    other => FileType::Unknown(other),
                }
            }

            pub fn code(self) -> u32 {
                match self {
                    $(FileType::$variant => $code,)*
                    FileType::Unknown(code) => code,
                }
            }

            /// Lowercase file extension, `None` for unknown codes.
            pub fn extension(self) -> Option<&'static str> {
                match self {
                    $(FileType::$variant => Some($ext),)*
                    FileType::Unknown(_) => None,
                }
            }
        }
    };
}

file_types! {
    Raw = 0x00 => "raw",
    Bmp = 0x01 => "bmp",
    Clp = 0x03 => "clp",
    Cut = 0x04 => "cut",
    Dib = 0x06 => "dib",
    Emf = 0x07 => "emf",
    Eps = 0x08 => "eps",
    Fpx = 0x09 => "fpx",
    Gif = 0x0a => "gif",
    Iff = 0x0b => "iff",
    Img = 0x0c => "img",
    Jpg = 0x11 => "jpg",
    Lbm = 0x13 => "lbm",
    Mac = 0x14 => "mac",
    Msp = 0x15 => "msp",
    Pbm = 0x16 => "pbm",
    Pcx = 0x18 => "pcx",
    Pgm = 0x19 => "pgm",
    Pic = 0x1a => "pic",
    Pct = 0x1b => "pct",
    Png = 0x1c => "png",
    Ppm = 0x1d => "ppm",
    Psd = 0x1e => "psd",
    Psp = 0x1f => "psp",
    Ras = 0x20 => "ras",
    Rle = 0x21 => "rle",
    Sct = 0x22 => "sct",
    Tga = 0x23 => "tga",
    Tif = 0x24 => "tif",
    Wmf = 0x25 => "wmf",
    Wpg = 0x26 => "wpg",
    Rgb = 0x27 => "rgb",
}

impl FileType {
    pub fn is_known(self) -> bool {
        !matches!(self, FileType::Unknown(_))
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.extension() {
            Some(ext) => f.write_str(ext),
            None => write!(f, "unknown(0x{:02x})", self.code()),
        }
    }
}
