use std::fs::{self, File};
use std::io;
use std::path::Path;

/// Moves `source` to `destination` without replacing an existing file.
///
/// Uses a rename on the same volume and falls back to copy then delete when
/// the destination is on another device.
pub fn move_file(source: &Path, destination: &Path) -> io::Result<()> {
    // rename(2) silently replaces its target.
    if destination.symlink_metadata().is_ok() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("destination {} is already occupied", destination.display()),
        ));
    }

    match fs::rename(source, destination) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            log::debug!(
                "{} is on another device, copying instead of renaming",
                source.display()
            );
            copy_then_remove(source, destination)
        }
        Err(e) => Err(e),
    }
}

fn copy_then_remove(source: &Path, destination: &Path) -> io::Result<()> {
    let meta = fs::metadata(source)?;
    let mut reader = File::open(source)?;
    let mut writer = File::create_new(destination)?;

    let copied = io::copy(&mut reader, &mut writer)
        .and_then(|_| writer.sync_all())
        .and_then(|()| fs::set_permissions(destination, meta.permissions()));

    if let Err(e) = copied {
        drop(writer);
        fs::remove_file(destination).ok();
        return Err(e);
    }

    // A copy left behind would duplicate a file the run reports as not moved.
    if let Err(e) = fs::remove_file(source) {
        fs::remove_file(destination).ok();
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_move_renames_file() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("movie.mkv");
        let dst = dir.path().join("review").join("movie.mkv");
        fs::create_dir(dir.path().join("review")).unwrap();
        fs::write(&src, b"payload").unwrap();

        move_file(&src, &dst).unwrap();

        assert!(!src.exists());
        assert_eq!(fs::read(&dst).unwrap(), b"payload");
    }

    #[test]
    fn test_move_refuses_occupied_destination() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("a.bin");
        let dst = dir.path().join("b.bin");
        fs::write(&src, b"new").unwrap();
        fs::write(&dst, b"old").unwrap();

        let err = move_file(&src, &dst).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read(&dst).unwrap(), b"old");
        assert!(src.exists());
    }

    #[test]
    fn test_copy_fallback_moves_contents() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("a.bin");
        let dst = dir.path().join("copy.bin");
        fs::write(&src, b"bytes").unwrap();

        copy_then_remove(&src, &dst).unwrap();

        assert!(!src.exists());
        assert_eq!(fs::read(&dst).unwrap(), b"bytes");
    }

    #[test]
    fn test_failed_copy_removes_partial_destination() {
        let dir = TempDir::new().unwrap();
        // Reading a directory as a file fails mid-copy.
        let src = dir.path().join("folder.bin");
        fs::create_dir(&src).unwrap();
        let dst = dir.path().join("copy.bin");

        assert!(copy_then_remove(&src, &dst).is_err());
        assert!(!dst.exists());
        assert!(src.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn test_undeletable_source_rolls_back_copy() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let locked = dir.path().join("locked");
        let review = dir.path().join("review");
        fs::create_dir(&locked).unwrap();
        fs::create_dir(&review).unwrap();
        let src = locked.join("big.bin");
        let dst = review.join("big.bin");
        fs::write(&src, b"payload").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

        // Privileged users ignore directory permissions.
        if fs::write(locked.join("write_check"), b"").is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let err = copy_then_remove(&src, &dst).unwrap_err();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        assert!(src.exists());
        assert!(!dst.exists());
    }

    #[test]
    fn test_vanished_source_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = move_file(&dir.path().join("gone"), &dir.path().join("dst")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
