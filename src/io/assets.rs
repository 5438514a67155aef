use std::fs;
use std::path::{Path, PathBuf};

/// Shown in place of an asset that could not be read
pub const MISSING_ASSET_TEXT: &str = "Error: Archivo no encontrado";

/// The static text files the screens display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Asset {
    Logo,
    Banner,
    ComoReciclar,
    Noticias,
    Centros,
}

impl Asset {
    pub const ALL: [Asset; 5] = [
        Asset::Logo,
        Asset::Banner,
        Asset::ComoReciclar,
        Asset::Noticias,
        Asset::Centros,
    ];

    /// Path relative to the asset directory
    pub fn relative_path(self) -> &'static str {
        match self {
            Asset::Logo => "images/logo.txt",
            Asset::Banner => "images/banner.txt",
            Asset::ComoReciclar => "news/como_reciclar.txt",
            Asset::Noticias => "news/noticias_recientes.txt",
            Asset::Centros => "news/centros_de_acopio.txt",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("missing asset {path}: {source}")]
    Missing {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub fn read_asset(dir: &Path, asset: Asset) -> Result<String, AssetError> {
    let path = dir.join(asset.relative_path());
    fs::read_to_string(&path).map_err(|e| AssetError::Missing { path, source: e })
}

/// Asset texts loaded once at startup, with placeholders for missing files
#[derive(Debug, Clone)]
pub struct AssetTexts {
    pub logo: String,
    pub banner: String,
    pub como_reciclar: String,
    pub noticias: String,
    pub centros: String,
}

impl Default for AssetTexts {
    fn default() -> Self {
        AssetTexts {
            logo: MISSING_ASSET_TEXT.to_string(),
            banner: MISSING_ASSET_TEXT.to_string(),
            como_reciclar: MISSING_ASSET_TEXT.to_string(),
            noticias: MISSING_ASSET_TEXT.to_string(),
            centros: MISSING_ASSET_TEXT.to_string(),
        }
    }
}

impl AssetTexts {
    pub fn load(dir: &Path) -> Self {
        let mut texts = AssetTexts::default();
        for asset in Asset::ALL {
            if let Ok(text) = read_asset(dir, asset) {
                *texts.slot_mut(asset) = text;
            }
        }
        texts
    }

    pub fn get(&self, asset: Asset) -> &str {
        match asset {
            Asset::Logo => &self.logo,
            Asset::Banner => &self.banner,
            Asset::ComoReciclar => &self.como_reciclar,
            Asset::Noticias => &self.noticias,
            Asset::Centros => &self.centros,
        }
    }

    fn slot_mut(&mut self, asset: Asset) -> &mut String {
        match asset {
            Asset::Logo => &mut self.logo,
            Asset::Banner => &mut self.banner,
            Asset::ComoReciclar => &mut self.como_reciclar,
            Asset::Noticias => &mut self.noticias,
            Asset::Centros => &mut self.centros,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_missing_asset_errors() {
        let tmp = TempDir::new().unwrap();
        assert!(matches!(
            read_asset(tmp.path(), Asset::Logo),
            Err(AssetError::Missing { .. })
        ));
    }

    #[test]
    fn load_mixes_found_and_placeholder() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("news")).unwrap();
        fs::write(tmp.path().join("news/noticias_recientes.txt"), "Hoy\n").unwrap();

        let texts = AssetTexts::load(tmp.path());
        assert_eq!(texts.get(Asset::Noticias), "Hoy\n");
        assert_eq!(texts.get(Asset::Logo), MISSING_ASSET_TEXT);
        assert_eq!(texts.get(Asset::Centros), MISSING_ASSET_TEXT);
    }

    #[test]
    fn bundled_assets_are_present() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
        for asset in Asset::ALL {
            assert!(read_asset(&dir, asset).is_ok(), "{:?}", asset);
        }
    }
}
