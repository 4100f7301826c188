use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Returns a path inside `dir` that does not exist right now.
///
/// `video.mp4` becomes `video_1.mp4`, then `video_2.mp4`, and so on. Each probe
/// hits the live filesystem, so files created by other processes mid-run are
/// still respected.
#[must_use]
pub fn unique_destination(dir: &Path, file_name: &OsStr) -> PathBuf {
    unique_destination_excluding(dir, file_name, &HashSet::new())
}

/// Like [`unique_destination`], also avoiding paths in `reserved`.
///
/// Dry runs reserve the names they have planned, since nothing lands on disk.
#[must_use]
pub fn unique_destination_excluding(
    dir: &Path,
    file_name: &OsStr,
    reserved: &HashSet<PathBuf>,
) -> PathBuf {
    let taken = |p: &Path| reserved.contains(p) || p.symlink_metadata().is_ok();

    let direct = dir.join(file_name);
    if !taken(&direct) {
        return direct;
    }

    let (stem, extension) = split_name(file_name);
    let mut counter: u64 = 1;
    loop {
        let candidate = dir.join(numbered_name(&stem, extension.as_deref(), counter));
        if !taken(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

/// Splits with the platform's rules: `.bashrc` has no extension, `a.tar.gz` is `a.tar` + `gz`.
fn split_name(file_name: &OsStr) -> (OsString, Option<OsString>) {
    let path = Path::new(file_name);
    let stem = path
        .file_stem()
        .map_or_else(|| file_name.to_os_string(), OsStr::to_os_string);
    let extension = path.extension().map(OsStr::to_os_string);
    (stem, extension)
}

fn numbered_name(stem: &OsStr, extension: Option<&OsStr>, counter: u64) -> OsString {
    let mut name = stem.to_os_string();
    name.push(format!("_{counter}"));
    if let Some(ext) = extension {
        name.push(".");
        name.push(ext);
    }
    name
}
