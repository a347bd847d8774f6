//! Configuración en tiempo de ejecución.
//!
//! Se lee de variables de entorno (y de un `.env` si existe):
//! - `CLASHGRAPH_DATAFILES_DIR`: directorio donde buscar archivos de datos con nombre relativo
//! - `CLASHGRAPH_SHEET`: hoja a leer en archivos de hoja de cálculo

use std::path::{Path, PathBuf};
use log::debug;

/// Directorio de datos por defecto (relativo al directorio de trabajo)
pub const DEFAULT_DATAFILES_DIR: &str = "datafiles";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub datafiles_dir: PathBuf,
    pub sheet: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            datafiles_dir: PathBuf::from(DEFAULT_DATAFILES_DIR),
            sheet: None,
        }
    }
}

impl Config {
    /// Carga `.env` (si no existe no es error) y lee las variables `CLASHGRAPH_*`.
    pub fn from_env() -> Self {
        let _ = dotenv::dotenv();
        Self::from_vars(|k| std::env::var(k).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables inyectable (tests).
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Config::default();
        if let Some(dir) = lookup("CLASHGRAPH_DATAFILES_DIR").filter(|s| !s.trim().is_empty()) {
            cfg.datafiles_dir = PathBuf::from(dir);
        }
        cfg.sheet = lookup("CLASHGRAPH_SHEET").filter(|s| !s.trim().is_empty());
        cfg
    }

    /// Resuelve un nombre de archivo: tal cual si existe, si no dentro de
    /// `datafiles_dir` si existe ahí; en otro caso se devuelve sin cambios para
    /// que el error de apertura reporte la ruta original.
    pub fn resolve_datafile(&self, name: &str) -> PathBuf {
        let direct = Path::new(name);
        if direct.exists() {
            return direct.to_path_buf();
        }
        let candidate = self.datafiles_dir.join(name);
        if candidate.exists() {
            debug!("[config] {} resuelto como {}", name, candidate.display());
            return candidate;
        }
        direct.to_path_buf()
    }
}
