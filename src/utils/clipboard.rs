//! Clipboard  cross-platform clipboard helpers

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("clipboard error: {0}")]
    Clip(String),
}

/// 将注释结果复制到系统剪贴板
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    use copypasta::{ClipboardContext, ClipboardProvider};
    let mut ctx = ClipboardContext::new().map_err(|e| ClipboardError::Clip(e.to_string()))?;
    ctx.set_contents(text.to_string())
        .map_err(|e| ClipboardError::Clip(e.to_string()))
}

/// 从系统剪贴板获取文本（用于测试）
#[cfg(test)]
pub fn get_clipboard_contents() -> Result<String, ClipboardError> {
    use copypasta::{ClipboardContext, ClipboardProvider};
    let mut ctx = ClipboardContext::new().map_err(|e| ClipboardError::Clip(e.to_string()))?;
    ctx.get_contents()
        .map_err(|e| ClipboardError::Clip(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_copy_annotated_code() {
        let annotated = "// 入口函数\nfn main() {}";

        // 无显示环境（CI）下剪贴板不可用，直接跳过
        if copy_to_clipboard(annotated).is_err() {
            return;
        }

        let clipboard_content = get_clipboard_contents().expect("从剪贴板读取应该成功");
        assert_eq!(clipboard_content, annotated, "剪贴板内容应与注释结果一致");
    }

    #[test]
    fn test_clipboard_unicode_comments() {
        let annotated = "# 打印问候语\nprint('你好, こんにちは')";

        if copy_to_clipboard(annotated).is_err() {
            return;
        }

        let clipboard_content = get_clipboard_contents().expect("从剪贴板读取应该成功");
        assert_eq!(clipboard_content, annotated, "剪贴板应正确处理多语言字符");
    }
}
