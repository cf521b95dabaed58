//! 程序入口：初始化日志、加载 Slint UI，并绑定 VM 回调

use std::{cell::RefCell, path::PathBuf, rc::Rc};

use anyhow::Context;
use slint::ComponentHandle;
use tracing_subscriber::fmt::SubscriberBuilder;

slint::include_modules!();

use daima_zhushi_qi::model::data_core::AppState;
use daima_zhushi_qi::model::target_lang::TargetLang;
use daima_zhushi_qi::net::client::CommentClient;
use daima_zhushi_qi::utils;
use daima_zhushi_qi::vm::bridge::*;

/// VM桥接器：管理UI与数据层的交互
struct ViewModelBridge {
    app_state: Rc<RefCell<AppState>>,
}

impl ViewModelBridge {
    /// 创建新的VM桥接器并绑定所有回调
    fn new(app_window: &AppWindow, app_state: Rc<RefCell<AppState>>) -> Self {
        let bridge = Self { app_state };
        bridge.setup_callbacks(app_window);
        bridge
    }

    /// 设置所有UI回调函数
    fn setup_callbacks(&self, app_window: &AppWindow) {
        let app_state = self.app_state.clone();

        // === 选择文件回调 ===
        {
            let app_state = app_state.clone();
            let app_window_weak = app_window.as_weak();
            app_window.on_select_file(move || {
                if let Some(app_window) = app_window_weak.upgrade() {
                    Self::handle_select_file(&app_window, &app_state);
                }
            });
        }

        // === 注释语言切换回调 ===
        {
            let app_state = app_state.clone();
            app_window.on_language_changed(move |index| {
                let lang = TargetLang::from_index(index);
                app_state.borrow_mut().set_target_lang(lang);
                tracing::info!("注释语言切换为: {}", lang.label());
            });
        }

        // === 提交回调 ===
        {
            let app_state = app_state.clone();
            let app_window_weak = app_window.as_weak();
            app_window.on_submit_pressed(move || {
                if let Some(app_window) = app_window_weak.upgrade() {
                    Self::handle_submit(&app_window, &app_state);
                }
            });
        }

        // === 提交成功回调（后台线程经事件循环投递） ===
        {
            let app_state = app_state.clone();
            let app_window_weak = app_window.as_weak();
            app_window.on_submission_succeeded(move |code| {
                if let Some(app_window) = app_window_weak.upgrade() {
                    tracing::info!("注释生成成功，结果长度: {} 字符", code.len());
                    app_state.borrow_mut().finish_with_result(code.to_string());
                    Self::refresh_window(&app_window, &app_state);
                    app_window.set_status_message(STATUS_DONE.into());
                }
            });
        }

        // === 提交失败回调 ===
        {
            let app_state = app_state.clone();
            let app_window_weak = app_window.as_weak();
            app_window.on_submission_failed(move |message| {
                if let Some(app_window) = app_window_weak.upgrade() {
                    tracing::error!("注释生成失败: {}", message);
                    app_state.borrow_mut().finish_with_error(message.to_string());
                    Self::refresh_window(&app_window, &app_state);
                    app_window.set_status_message(format!("{}{}", STATUS_ERROR_PREFIX, message).into());
                }
            });
        }

        // === 下载回调 ===
        {
            let app_state = app_state.clone();
            let app_window_weak = app_window.as_weak();
            app_window.on_download_pressed(move || {
                if let Some(app_window) = app_window_weak.upgrade() {
                    Self::handle_download(&app_window, &app_state);
                }
            });
        }

        // === 复制结果回调 ===
        {
            let app_state = app_state.clone();
            let app_window_weak = app_window.as_weak();
            app_window.on_copy_result_pressed(move || {
                if let Some(app_window) = app_window_weak.upgrade() {
                    Self::handle_copy_result(&app_window, &app_state);
                }
            });
        }
    }

    /// 初始化UI状态
    fn initialize_ui(&self, app_window: &AppWindow) {
        Self::refresh_window(app_window, &self.app_state);
        app_window.set_status_message(STATUS_READY.into());
    }

    /// 将AppState同步到窗口属性
    fn refresh_window(app_window: &AppWindow, app_state: &Rc<RefCell<AppState>>) {
        let state = app_state.borrow();
        app_window.set_file_name(state.file_name.clone().into());
        app_window.set_commented_code(state.commented_code.clone().into());
        app_window.set_error_message(state.error_message.clone().into());
        app_window.set_is_loading(state.is_loading);
    }

    /// 显示文件选择对话框
    fn show_file_dialog() -> Option<PathBuf> {
        use rfd::FileDialog;

        // 不做本地文件类型校验，任何文件都交由后端判断
        let file_path = FileDialog::new()
            .add_filter("所有文件", &["*"])
            .add_filter("常见代码文件", &["rs", "py", "js", "ts", "java", "c", "cpp", "h", "go"])
            .set_title("选择要注释的代码文件")
            .pick_file();

        match file_path {
            Some(path) => {
                tracing::info!("用户选择了文件: {}", path.display());
                Some(path)
            }
            None => {
                tracing::info!("用户取消了文件选择");
                None
            }
        }
    }

    /// 处理文件选择：用户取消时保持原状态（防御性无操作）
    fn handle_select_file(app_window: &AppWindow, app_state: &Rc<RefCell<AppState>>) {
        match Self::show_file_dialog() {
            Some(path) => {
                app_state.borrow_mut().select_file(Some(path));
                Self::refresh_window(app_window, app_state);
                app_window.set_status_message(STATUS_READY.into());
            }
            None => {
                app_window.set_status_message(STATUS_FILE_CANCELLED.into());
            }
        }
    }

    /// 处理提交：本地校验 → 置忙 → 后台线程上传 → 事件循环回投结果
    fn handle_submit(app_window: &AppWindow, app_state: &Rc<RefCell<AppState>>) {
        let begin_result = app_state.borrow_mut().begin_submission();
        let job = match begin_result {
            Ok(job) => job,
            Err(e) => {
                Self::refresh_window(app_window, app_state);
                app_window.set_status_message(format!("{}{}", STATUS_ERROR_PREFIX, e).into());
                tracing::warn!("提交被拒绝: {}", e);
                return;
            }
        };

        // 忙碌标志与旧结果清理已在 begin_submission 中同步完成
        Self::refresh_window(app_window, app_state);
        app_window.set_status_message(STATUS_SUBMITTING.into());
        tracing::info!("开始提交: {} (注释语言: {})", job.file_name, job.target_lang.label());

        // 网络调用在后台线程执行，完成后经事件循环回投，保持UI响应
        let app_window_weak = app_window.as_weak();
        std::thread::spawn(move || {
            let client = CommentClient::default();
            let outcome = client.annotate(&job.path, &job.file_name, job.target_lang);
            let _ = slint::invoke_from_event_loop(move || {
                if let Some(app_window) = app_window_weak.upgrade() {
                    match outcome {
                        Ok(code) => app_window.invoke_submission_succeeded(code.into()),
                        Err(e) => app_window.invoke_submission_failed(e.user_message().into()),
                    }
                }
            });
        });
    }

    /// 处理下载：结果或所选文件缺失时为无操作
    fn handle_download(app_window: &AppWindow, app_state: &Rc<RefCell<AppState>>) {
        let (content, default_name) = {
            let state = app_state.borrow();
            match state.download_file_name() {
                Some(name) => (state.commented_code.clone(), name),
                None => return,
            }
        };

        let save_path = rfd::FileDialog::new()
            .set_title("保存已注释的文件")
            .set_file_name(&default_name)
            .save_file();

        let Some(path) = save_path else {
            app_window.set_status_message(STATUS_SAVE_CANCELLED.into());
            tracing::info!("用户取消了保存");
            return;
        };

        match utils::fs::write_text_file(&path, &content) {
            Ok(()) => {
                app_window.set_status_message(format!("{}{}", STATUS_SAVED_PREFIX, path.display()).into());
                tracing::info!("已保存注释文件: {}", path.display());
            }
            Err(e) => {
                app_window.set_status_message(format!("{}{}", STATUS_ERROR_PREFIX, e).into());
                tracing::error!("保存失败: {}", e);
            }
        }
    }

    /// 处理复制结果到剪贴板
    fn handle_copy_result(app_window: &AppWindow, app_state: &Rc<RefCell<AppState>>) {
        let content = app_state.borrow().commented_code.clone();
        if content.is_empty() {
            app_window.set_status_message("错误: 没有可复制的内容".into());
            return;
        }

        match utils::clipboard::copy_to_clipboard(&content) {
            Ok(()) => {
                app_window.set_status_message(STATUS_COPIED.into());
                tracing::info!("结果已复制到剪贴板，长度: {} 字符", content.len());
            }
            Err(e) => {
                app_window.set_status_message(format!("{}{}", STATUS_ERROR_PREFIX, e).into());
                tracing::error!("复制失败: {}", e);
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    // 初始化日志输出
    let _ = SubscriberBuilder::default()
        .with_max_level(tracing::Level::INFO)
        .try_init();

    let app = AppWindow::new().context("UI 初始化失败")?;
    let state = Rc::new(RefCell::new(AppState::default()));

    // 创建VM桥接器并绑定UI回调
    let bridge = ViewModelBridge::new(&app, state);
    bridge.initialize_ui(&app);

    tracing::info!("应用启动成功，UI已初始化");
    app.run().context("事件循环异常退出")?;
    Ok(())
}
