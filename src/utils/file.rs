//! File reading utilities

use crate::error::{FetchError, Result};
use std::fs;
use std::path::Path;

/// Safely read a file to string with error handling
pub fn read_file_safe<P: AsRef<Path>>(path: P) -> Result<String> {
    fs::read_to_string(path).map_err(FetchError::from)
}

/// Read a whole small file, trimmed. Convenience for single-value sysfs nodes.
pub fn read_trimmed<P: AsRef<Path>>(path: P) -> Result<String> {
    Ok(read_file_safe(path)?.trim().to_string())
}

/// Read first line of a file, trimmed.
/// Optimized for single-line files like /proc/sys/kernel/hostname;
/// uses a direct syscall to avoid buffered-reader overhead.
pub fn read_first_line<P: AsRef<Path>>(path: P) -> Result<String> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let path_cstr = CString::new(path.as_ref().as_os_str().as_bytes())
        .map_err(|_| FetchError::Parse("Invalid path".to_string()))?;

    unsafe {
        let fd = libc::open(path_cstr.as_ptr(), libc::O_RDONLY);
        if fd < 0 {
            return Err(FetchError::from(std::io::Error::last_os_error()));
        }

        let mut buffer = [0u8; 512];
        let bytes_read = libc::read(fd, buffer.as_mut_ptr() as *mut libc::c_void, buffer.len());
        libc::close(fd);

        if bytes_read < 0 {
            return Err(FetchError::from(std::io::Error::last_os_error()));
        }

        if bytes_read == 0 {
            return Ok(String::new());
        }

        let content = std::str::from_utf8(&buffer[..bytes_read as usize])
            .map_err(|_| FetchError::Parse("Invalid UTF-8".to_string()))?;
        Ok(content.lines().next().unwrap_or("").trim().to_string())
    }
}

/// Check if a file exists safely
pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_line_of_proc_file() {
        // Present on every Linux machine the crate targets.
        let line = read_first_line("/proc/uptime").unwrap();
        assert!(!line.is_empty());
        assert!(!line.contains('\n'));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_first_line("/nonexistent/ferrofetch").is_err());
        assert!(read_file_safe("/nonexistent/ferrofetch").is_err());
    }
}
