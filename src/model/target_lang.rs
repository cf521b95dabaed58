//! 目标注释语言：UI 显示标签与后端线上令牌解耦

/// 注释语言枚举（默认中文）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetLang {
    #[default]
    Chinese,
    English,
    Japanese,
}

impl TargetLang {
    /// 固定的三个选项，顺序与 UI 下拉框一致
    pub const ALL: [TargetLang; 3] = [TargetLang::Chinese, TargetLang::English, TargetLang::Japanese];

    /// 发送到注释服务的线上令牌（必须与协作后端约定完全一致）
    pub fn wire_token(self) -> &'static str {
        match self {
            TargetLang::Chinese => "中文",
            TargetLang::English => "英文",
            TargetLang::Japanese => "日文",
        }
    }

    /// UI 下拉框显示标签
    pub fn label(self) -> &'static str {
        match self {
            TargetLang::Chinese => "中文",
            TargetLang::English => "English",
            TargetLang::Japanese => "日本語",
        }
    }

    /// 从下拉框索引还原枚举，越界时回退到默认值
    pub fn from_index(index: i32) -> Self {
        match index {
            1 => TargetLang::English,
            2 => TargetLang::Japanese,
            _ => TargetLang::Chinese,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_chinese() {
        assert_eq!(TargetLang::default(), TargetLang::Chinese, "默认注释语言应为中文");
    }

    #[test]
    fn test_wire_tokens_match_backend_contract() {
        // 线上令牌由配套后端定义，三个值必须逐字符一致
        assert_eq!(TargetLang::Chinese.wire_token(), "中文");
        assert_eq!(TargetLang::English.wire_token(), "英文");
        assert_eq!(TargetLang::Japanese.wire_token(), "日文");
    }

    #[test]
    fn test_labels_differ_from_tokens() {
        assert_eq!(TargetLang::English.label(), "English");
        assert_eq!(TargetLang::Japanese.label(), "日本語");
    }

    #[test]
    fn test_from_index_roundtrip() {
        for (i, lang) in TargetLang::ALL.iter().enumerate() {
            assert_eq!(TargetLang::from_index(i as i32), *lang);
        }
        assert_eq!(TargetLang::from_index(99), TargetLang::Chinese, "越界索引应回退到默认值");
    }
}
