//! AppState：注释生成器核心状态与单次提交流转

use std::path::PathBuf;

use thiserror::Error;

use crate::model::target_lang::TargetLang;

/// 未选择文件时的固定提示
pub const MSG_NO_FILE: &str = "请先选择一个代码文件！";
/// 远程调用失败且无可用错误信息时的通用提示
pub const MSG_GENERIC_FAILURE: &str = "生成注释时发生未知错误，请检查后端服务是否正常运行。";
/// 未选择文件时的文件名占位显示
pub const NO_FILE_LABEL: &str = "尚未选择文件";
/// 下载文件名前缀：commented_<原文件名>
pub const DOWNLOAD_PREFIX: &str = "commented_";

/// 单窗口视图的全部可变状态（提交落定后，结果与错误至多一个非空）
#[derive(Debug)]
pub struct AppState {
    pub selected_file: Option<PathBuf>,
    pub file_name: String,
    pub target_lang: TargetLang,
    pub commented_code: String,
    pub error_message: String,
    pub is_loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            selected_file: None,
            file_name: NO_FILE_LABEL.to_string(),
            target_lang: TargetLang::default(),
            commented_code: String::new(),
            error_message: String::new(),
            is_loading: false,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO失败: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    State(String),
}

/// 一次提交所需的数据快照（移交后台线程，避免跨线程共享状态）
#[derive(Debug, Clone)]
pub struct SubmitJob {
    pub path: PathBuf,
    pub file_name: String,
    pub target_lang: TargetLang,
}

impl AppState {
    /// 选择文件：替换当前选择并更新显示名；None（用户取消选择器）为无操作
    pub fn select_file(&mut self, handle: Option<PathBuf>) {
        if let Some(path) = handle {
            self.file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            self.selected_file = Some(path);
        }
    }

    /// 设置目标注释语言（下拉框保证取值合法，这里不再校验）
    pub fn set_target_lang(&mut self, lang: TargetLang) {
        self.target_lang = lang;
    }

    /// 开始一次提交：本地前置校验，并同步清理上一次的结果与错误
    ///
    /// 未选择文件时设置固定错误并拒绝（不置忙，不发起网络调用）；
    /// 忙碌期间的重复调用被拒绝且不触碰在途状态。
    pub fn begin_submission(&mut self) -> Result<SubmitJob, AppError> {
        if self.is_loading {
            return Err(AppError::State("上一次提交仍在进行中".to_string()));
        }
        let Some(path) = self.selected_file.clone() else {
            self.error_message = MSG_NO_FILE.to_string();
            return Err(AppError::State(MSG_NO_FILE.to_string()));
        };

        self.is_loading = true;
        self.error_message.clear();
        self.commented_code.clear();

        Ok(SubmitJob {
            path,
            file_name: self.file_name.clone(),
            target_lang: self.target_lang,
        })
    }

    /// 提交成功：按原样保存注释结果并回到空闲
    pub fn finish_with_result(&mut self, code: String) {
        self.commented_code = code;
        self.error_message.clear();
        self.is_loading = false;
    }

    /// 提交失败：记录面向用户的错误信息并回到空闲
    pub fn finish_with_error(&mut self, message: String) {
        self.error_message = message;
        self.commented_code.clear();
        self.is_loading = false;
    }

    /// 下载前置条件：结果与所选文件都必须存在
    pub fn can_download(&self) -> bool {
        !self.commented_code.is_empty() && self.selected_file.is_some()
    }

    /// 派生下载文件名：commented_<原文件名>；前置条件不满足时返回 None
    pub fn download_file_name(&self) -> Option<String> {
        if self.can_download() {
            Some(format!("{}{}", DOWNLOAD_PREFIX, self.file_name))
        } else {
            None
        }
    }
}
