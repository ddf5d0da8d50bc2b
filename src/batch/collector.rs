//! # 文件收集器
//!
//! 扫描输入目录，收集待转换的图片文件列表。
//!
//! ## 功能
//! - 按扩展名过滤（大小写不敏感）
//! - 排除名单（如有意保留不动的 rrss.jpg）
//! - 按文件名字典序排序，保证报告可复现
//!
//! ## 依赖关系
//! - 被 `commands/images.rs` 调用
//! - 使用 `walkdir` 遍历目录

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Result, WeboptError};

/// 默认识别的图片扩展名
const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// 一个待转换的输入文件
///
/// 在目录扫描时创建，之后不再修改。
#[derive(Debug, Clone)]
pub struct ConversionTarget {
    /// 输入文件路径
    pub path: PathBuf,
    /// 文件名（含扩展名）
    pub file_name: String,
    /// 去掉扩展名的基础名
    pub stem: String,
    /// 扩展名（小写，不含点）
    pub extension: String,
}

/// 图片文件收集器
pub struct ImageCollector {
    /// 输入目录
    input: PathBuf,
    /// 识别的扩展名（小写）
    extensions: Vec<String>,
    /// 排除的文件名
    denylist: Vec<String>,
}

impl ImageCollector {
    /// 创建新的收集器，默认识别 png/jpg/jpeg
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            extensions: IMAGE_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            denylist: Vec::new(),
        }
    }

    /// 覆盖识别的扩展名集合
    pub fn with_extensions(mut self, extensions: &[&str]) -> Self {
        self.extensions = extensions.iter().map(|s| s.to_lowercase()).collect();
        self
    }

    /// 设置按文件名排除的名单
    pub fn with_denylist(mut self, denylist: &[String]) -> Self {
        self.denylist = denylist.to_vec();
        self
    }

    /// 收集所有匹配的文件，按文件名字典序排序
    ///
    /// 只扫描目录顶层，不递归。空结果不是错误；
    /// 输入不是目录则返回 `DirectoryNotFound`。
    pub fn collect(&self) -> Result<Vec<ConversionTarget>> {
        if !self.input.is_dir() {
            return Err(WeboptError::DirectoryNotFound {
                path: self.input.display().to_string(),
            });
        }

        let mut targets: Vec<ConversionTarget> = WalkDir::new(&self.input)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| self.to_target(e.path()))
            .collect();

        targets.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(targets)
    }

    /// 检查单个路径是否入选，入选则构造目标
    fn to_target(&self, path: &Path) -> Option<ConversionTarget> {
        let file_name = path.file_name()?.to_str()?.to_string();
        if self.denylist.iter().any(|d| d == &file_name) {
            return None;
        }

        let extension = path.extension()?.to_str()?.to_lowercase();
        if !self.extensions.iter().any(|e| e == &extension) {
            return None;
        }

        let stem = path.file_stem()?.to_str()?.to_string();
        Some(ConversionTarget {
            path: path.to_path_buf(),
            file_name,
            stem,
            extension,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"x").unwrap();
    }

    #[test]
    fn test_collect_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "b.jpg");
        touch(dir.path(), "a.png");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "cover.jpeg");

        let targets = ImageCollector::new(dir.path().to_path_buf())
            .collect()
            .unwrap();

        let names: Vec<&str> = targets.iter().map(|t| t.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.png", "b.jpg", "cover.jpeg"]);
        assert_eq!(targets[0].stem, "a");
        assert_eq!(targets[0].extension, "png");
    }

    #[test]
    fn test_collect_extension_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "logo.PNG");
        touch(dir.path(), "photo.Jpg");

        let targets = ImageCollector::new(dir.path().to_path_buf())
            .collect()
            .unwrap();

        assert_eq!(targets.len(), 2);
        // 扩展名归一化为小写，文件名保持原样
        assert_eq!(targets[0].file_name, "logo.PNG");
        assert_eq!(targets[0].extension, "png");
    }

    #[test]
    fn test_collect_denylist() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.png");
        touch(dir.path(), "rrss.jpg");
        touch(dir.path(), "b.jpg");

        let targets = ImageCollector::new(dir.path().to_path_buf())
            .with_denylist(&["rrss.jpg".to_string()])
            .collect()
            .unwrap();

        let names: Vec<&str> = targets.iter().map(|t| t.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.png", "b.jpg"]);
    }

    #[test]
    fn test_collect_skips_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.png");
        fs::create_dir(dir.path().join("optimized")).unwrap();
        touch(&dir.path().join("optimized"), "old.png");

        let targets = ImageCollector::new(dir.path().to_path_buf())
            .collect()
            .unwrap();

        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].file_name, "a.png");
    }

    #[test]
    fn test_collect_empty_dir_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let targets = ImageCollector::new(dir.path().to_path_buf())
            .collect()
            .unwrap();
        assert!(targets.is_empty());
    }

    #[test]
    fn test_collect_missing_dir_fails() {
        let result = ImageCollector::new(PathBuf::from("/no/such/directory")).collect();
        assert!(matches!(
            result,
            Err(WeboptError::DirectoryNotFound { .. })
        ));
    }
}
