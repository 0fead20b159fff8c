//! Background fetch of the specimen's face files.
//!
//! The fetch runs off the UI thread and only touches the filesystem. Face
//! registration with FLTK happens back on the UI thread once the
//! `FontsFetched` message arrives.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use fltk::app::Sender;
use log::{debug, warn};

use crate::app::domain::messages::Message;
use crate::app::domain::style::{FamilyChoice, Subfamily};
use crate::app::infrastructure::error::{AppError, Result};

/// sfnt version tags FLTK can register: TrueType outlines, `true` (Apple) and CFF.
const SFNT_SIGNATURES: [[u8; 4]; 3] = [[0x00, 0x01, 0x00, 0x00], *b"true", *b"OTTO"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceSpec {
    pub family: FamilyChoice,
    pub subfamily: Subfamily,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedFace {
    pub family: FamilyChoice,
    pub subfamily: Subfamily,
    pub path: PathBuf,
    pub bytes: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchReport {
    pub fetched: Vec<FetchedFace>,
    pub missing: Vec<PathBuf>,
}

/// `Firple-Regular.ttf` ... `FirpleSlim-BoldItalic.ttf` under `font_dir`.
pub fn face_specs(font_dir: &Path) -> Vec<FaceSpec> {
    FamilyChoice::all()
        .iter()
        .flat_map(|family| {
            Subfamily::all().iter().map(move |subfamily| FaceSpec {
                family: *family,
                subfamily: *subfamily,
                path: font_dir.join(format!(
                    "{}-{}.ttf",
                    family.file_prefix(),
                    subfamily.file_stem()
                )),
            })
        })
        .collect()
}

/// Check the sfnt header and return the file size. FLTK reads the outlines
/// itself when the face is registered.
fn read_face(path: &Path) -> Result<u64> {
    let mut file = File::open(path)?;
    let mut head = [0u8; 4];
    let valid = file.read_exact(&mut head).is_ok() && SFNT_SIGNATURES.contains(&head);
    if !valid {
        return Err(AppError::Config(format!(
            "{} is not a TrueType/OpenType font",
            path.display()
        )));
    }
    Ok(file.metadata()?.len())
}

pub fn fetch_faces(specs: &[FaceSpec]) -> FetchReport {
    let mut report = FetchReport::default();
    for spec in specs {
        match read_face(&spec.path) {
            Ok(bytes) => {
                debug!("fetched {} ({} bytes)", spec.path.display(), bytes);
                report.fetched.push(FetchedFace {
                    family: spec.family,
                    subfamily: spec.subfamily,
                    path: spec.path.clone(),
                    bytes,
                });
            }
            Err(e) => {
                warn!("face {} unavailable: {}", spec.path.display(), e);
                report.missing.push(spec.path.clone());
            }
        }
    }
    report
}

pub struct FontLoader {
    sender: Sender<Message>,
    font_dir: PathBuf,
}

impl FontLoader {
    pub fn new(sender: Sender<Message>, font_dir: PathBuf) -> Self {
        Self { sender, font_dir }
    }

    pub fn font_dir(&self) -> &Path {
        &self.font_dir
    }

    /// Announce loading, then fetch on a worker thread and report back.
    pub fn begin(&self) {
        self.sender.send(Message::FontsLoading);

        let sender = self.sender;
        let specs = face_specs(&self.font_dir);
        std::thread::spawn(move || {
            let report = fetch_faces(&specs);
            sender.send(Message::FontsFetched(report));
        });
    }
}
