//! IO helper: writing annotated sources to disk

use std::path::Path;

use crate::model::data_core::AppError;

/// 将注释后的完整源码按原样写入目标路径
pub fn write_text_file(p: &Path, content: &str) -> Result<(), AppError> {
    std::fs::write(p, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_text_file_exact_content() {
        let dir = tempfile::tempdir().expect("创建临时目录失败");
        let path = dir.path().join("commented_sample.js");

        let content = "// hello\nconsole.log(1)";
        write_text_file(&path, content).expect("写入应该成功");

        let written = std::fs::read_to_string(&path).expect("读取应该成功");
        assert_eq!(written, content, "写入内容应与结果逐字符一致");
    }

    #[test]
    fn test_write_text_file_empty_string() {
        let dir = tempfile::tempdir().expect("创建临时目录失败");
        let path = dir.path().join("commented_empty.txt");

        write_text_file(&path, "").expect("写入空字符串应该成功");
        assert_eq!(std::fs::read_to_string(&path).expect("读取应该成功"), "");
    }
}
