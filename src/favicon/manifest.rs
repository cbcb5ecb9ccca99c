//! Web manifest 产物。
//!
//! 内容固定，与源图和配置无关；通过 serde 模型 + 制表符缩进的 pretty 格式输出。

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::generator::write_artifact;
use super::source::StepReport;
use super::{FaviconError, FaviconGenerator};

#[derive(Serialize)]
struct WebManifest {
    name: &'static str,
    icons: [ManifestIcon; 2],
}

#[derive(Serialize)]
struct ManifestIcon {
    src: &'static str,
    sizes: &'static str,
    #[serde(rename = "type")]
    mime_type: &'static str,
}

const WEB_MANIFEST: WebManifest = WebManifest {
    name: "Website Favicon",
    icons: [
        ManifestIcon {
            src: "/images/favicon-192x192.png",
            sizes: "192x192",
            mime_type: "image/png",
        },
        ManifestIcon {
            src: "/images/favicon-512x512.png",
            sizes: "512x512",
            mime_type: "image/png",
        },
    ],
};

/// 渲染 manifest 文本（制表符缩进，无结尾换行）。
pub fn render_manifest() -> Result<String, FaviconError> {
    let mut bytes = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut bytes, formatter);

    WEB_MANIFEST
        .serialize(&mut serializer)
        .map_err(|e| FaviconError::Encode(format!("manifest 序列化失败：{}", e)))?;

    String::from_utf8(bytes).map_err(|e| FaviconError::Encode(format!("manifest 编码异常：{}", e)))
}

impl FaviconGenerator {
    pub fn generate_manifest(&self, output_dir: &Path) -> StepReport {
        let result = self.write_manifest(output_dir);
        Self::record(&self.config.manifest_file_name, result)
    }

    fn write_manifest(&self, output_dir: &Path) -> Result<PathBuf, FaviconError> {
        let content = render_manifest()?;
        write_artifact(&output_dir.join(&self.config.manifest_file_name), content.as_bytes())
    }
}
