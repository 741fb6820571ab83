//! Output file naming.
//!
//! Layers are frequently named alike ("Layer", "Cut"), so every name handed
//! out is made unique within one namer.

use std::collections::HashMap;

/// Hands out unique output file names for one export run.
#[derive(Debug, Clone, Default)]
pub struct OutputNamer {
    extension: String,
    uses: HashMap<String, usize>,
}

impl OutputNamer {
    /// Create a namer for files with `extension` (leading dot optional).
    pub fn new(extension: &str) -> Self {
        Self {
            extension: extension.trim_start_matches('.').to_string(),
            uses: HashMap::new(),
        }
    }

    /// File name for the next file called `name`.
    ///
    /// The first use yields `name.ext`, later ones `name_2.ext`, `name_3.ext`
    /// and so on. A name that already contains a dot gets its counter before
    /// the first dot: `part.v1` becomes `part_2.v1.ext`.
    pub fn next_name(&mut self, name: &str) -> String {
        let count = self.uses.entry(name.to_string()).or_insert(0);
        *count += 1;

        let stem = if *count == 1 {
            name.to_string()
        } else {
            match name.split_once('.') {
                Some((head, tail)) => format!("{head}_{count}.{tail}"),
                None => format!("{name}_{count}"),
            }
        };
        format!("{stem}.{}", self.extension)
    }
}
