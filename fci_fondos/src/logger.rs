use flexi_logger::{DeferredNow, Logger};
use log::Record;
use std::error::Error;
use std::io::Write;

// Mismo formato de linea que el servidor: fecha, nivel y mensaje
fn formato_linea(
    write: &mut dyn Write,
    _now: &mut DeferredNow,
    record: &Record,
) -> std::io::Result<()> {
    write!(
        write,
        "{} [{}] - {}",
        chrono::Local::now().format("%Y-%m-%d: %H:%M:%S"),
        record.level(),
        record.args()
    )
}

/// Inicializa el logger sobre stderr. El nivel se toma de `RUST_LOG` y por defecto es "warn".
/// Stdout queda reservado para el resultado.
pub fn init_logger() -> Result<(), Box<dyn Error>> {
    Logger::try_with_env_or_str("warn")?
        .log_to_stderr()
        .format(formato_linea)
        .start()?;
    Ok(())
}
