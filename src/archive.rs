//! Workspace archive container.
//!
//! A workspace is a zip file holding the canonical document at a fixed
//! entry name, referenced images under `assets/`, and a reserved
//! `.private/` area marked by an empty keep entry so the directory
//! survives tools that drop empty folders.

use crate::PolarError;
use polar_doc::{
    BlockMeta, BlockVisitor, Document, Image, Inline, InlineVisitor, ListItem, ListKind,
};
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Entry name of the canonical document inside the archive.
pub const MAIN_ENTRY: &str = "main.polar";
/// Directory prefix for bundled image assets.
pub const ASSETS_DIR: &str = "assets";
/// Marker entry that keeps the reserved private area present.
pub const PRIVATE_KEEP: &str = ".private/.keep";

/// One file to bundle under `assets/`: the archive entry name and the
/// source path on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetRef {
    pub entry: String,
    pub source: PathBuf,
}

/// Reads the canonical document out of a workspace archive.
pub fn open(path: impl AsRef<Path>) -> Result<Document, PolarError> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file)?;
    let mut entry = archive.by_name(MAIN_ENTRY)?;
    let mut text = String::new();
    entry.read_to_string(&mut text)?;
    Ok(polar_canonical::read(&text)?)
}

/// Writes a workspace archive: the canonical document, every asset,
/// and the private-area marker.
pub fn save(
    path: impl AsRef<Path>,
    doc: &Document,
    assets: &[AssetRef],
) -> Result<(), PolarError> {
    let file = File::create(path)?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    writer.start_file(MAIN_ENTRY, options)?;
    let xml = polar_canonical::write(doc)?;
    writer.write_all(xml.as_bytes())?;

    for asset in assets {
        let bytes = std::fs::read(&asset.source)?;
        writer.start_file(asset.entry.as_str(), options)?;
        writer.write_all(&bytes)?;
    }

    writer.start_file(PRIVATE_KEEP, options)?;
    writer.finish()?;
    Ok(())
}

/// Walks the document and gathers every image with a recorded source
/// path into an asset list. Relative paths resolve against `base_dir`;
/// the entry name is `assets/<file name>`. Images without a source
/// path, and paths without a final component, are skipped with a
/// warning.
pub fn collect_assets(doc: &Document, base_dir: &Path) -> Vec<AssetRef> {
    let mut collector = AssetCollector { base_dir, assets: Vec::new() };
    for block in &doc.blocks {
        block.accept(&mut collector);
    }
    collector.assets
}

struct AssetCollector<'a> {
    base_dir: &'a Path,
    assets: Vec<AssetRef>,
}

impl AssetCollector<'_> {
    fn walk(&mut self, inlines: &[Inline]) {
        for inline in inlines {
            inline.accept(self);
        }
    }
}

impl BlockVisitor<()> for AssetCollector<'_> {
    fn visit_heading(&mut self, _: &BlockMeta, _: u8, inlines: &[Inline]) {
        self.walk(inlines);
    }
    fn visit_paragraph(&mut self, _: &BlockMeta, inlines: &[Inline]) {
        self.walk(inlines);
    }
    fn visit_list(&mut self, _: &BlockMeta, _: ListKind, items: &[ListItem]) {
        for item in items {
            self.walk(&item.inlines);
        }
    }
    fn visit_code(&mut self, _: &BlockMeta, _: Option<&str>, _: &str) {}
    fn visit_rule(&mut self, _: &BlockMeta) {}
    fn visit_blank(&mut self, _: &BlockMeta, _: u32) {}
}

impl InlineVisitor<()> for AssetCollector<'_> {
    fn visit_text(&mut self, _: &str) {}
    fn visit_strong(&mut self, children: &[Inline]) {
        self.walk(children);
    }
    fn visit_emphasis(&mut self, children: &[Inline]) {
        self.walk(children);
    }
    fn visit_code(&mut self, _: &str) {}
    fn visit_link(&mut self, _: &str, _: Option<&str>, children: &[Inline]) {
        self.walk(children);
    }
    fn visit_image(&mut self, image: &Image) {
        let Some(original) = &image.original_path else {
            return;
        };
        let source = {
            let p = Path::new(original);
            if p.is_absolute() { p.to_path_buf() } else { self.base_dir.join(p) }
        };
        let Some(name) = source.file_name().and_then(|n| n.to_str()) else {
            log::warn!("asset path has no file name, skipping: {original}");
            return;
        };
        self.assets.push(AssetRef {
            entry: format!("{ASSETS_DIR}/{name}"),
            source,
        });
    }
    fn visit_line_break(&mut self) {}
}
