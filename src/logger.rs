use std::{
    fs::{File, OpenOptions},
    io::{self, Write},
    path::Path,
};

use env_logger::{Builder, Env, Target};

/// Copies every record to stderr as well as to the log file.
struct Tee<W> {
    file: W,
}

impl<W: Write> Write for Tee<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write_all(buf)?;
        io::stderr().write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()?;
        io::stderr().flush()
    }
}

fn open(path: &Path) -> io::Result<Tee<File>> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(Tee { file })
}

/// Sets up `env_logger`. `RUST_LOG` overrides the default filter, which is
/// `info` when logging to a file (and stderr) and `warn` on stderr alone.
pub(crate) fn init(log_file: Option<&Path>) -> io::Result<()> {
    let default_filter = if log_file.is_some() { "info" } else { "warn" };
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_filter));

    builder.format(|buf, record| {
        writeln!(
            buf,
            "[{}] - {} - {} - {}",
            buf.timestamp_seconds(),
            record.level(),
            record.module_path().unwrap_or("calc"),
            record.args()
        )
    });

    if let Some(path) = log_file {
        builder.target(Target::Pipe(Box::new(open(path)?)));
    }

    if let Err(why) = builder.try_init() {
        log::debug!("Keeping the installed logger: {why}");
    }
    Ok(())
}
