//! 読み込み → OCR → 行抽出 → Excel生成 → ダウンロード の一連の処理
//!
//! エラーはここで一度だけ捕捉し、成否にかかわらず Session を Idle に戻す。

use crate::config::Settings;
use crate::delivery::Delivery;
use crate::error::{Error, Result};
use crate::export::build_spreadsheet;
use crate::lines::extract_lines;
use crate::recognizer::Recognizer;
use crate::session::{Session, SessionStore};
use crate::source::SourceFile;

/// 1回の処理結果の概要
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub file_name: String,
    pub line_count: usize,
    pub output_file_name: String,
    pub output_size: usize,
}

/// `process` の結果
#[derive(Debug)]
pub enum Outcome {
    /// ファイル未選択または処理中のため何もしなかった
    Skipped,
    Delivered(RunReport),
    Failed(Error),
}

/// 選択中のファイルを処理してExcelを渡す
///
/// ファイル未選択・処理中なら状態を変えずに `Outcome::Skipped` を返す。
/// それ以外は必ず Idle（進捗0）に戻ってから返る。
pub async fn process<S, R, D>(
    store: &S,
    recognizer: &R,
    delivery: &D,
    settings: &Settings,
) -> Outcome
where
    S: SessionStore,
    S::File: SourceFile,
    R: Recognizer,
    D: Delivery,
{
    let Some(file) = store.with_session(Session::begin).flatten() else {
        return Outcome::Skipped;
    };

    let on_progress = {
        let store = store.clone();
        move |fraction: f32| {
            store.with_session(|s| s.report_progress(fraction));
        }
    };

    let result = run(&file, recognizer, delivery, settings, on_progress).await;
    store.with_session(Session::finish);

    match result {
        Ok(report) => Outcome::Delivered(report),
        Err(e) => Outcome::Failed(e),
    }
}

async fn run<F, R, D>(
    file: &F,
    recognizer: &R,
    delivery: &D,
    settings: &Settings,
    on_progress: impl Fn(f32) + 'static,
) -> Result<RunReport>
where
    F: SourceFile,
    R: Recognizer,
    D: Delivery,
{
    let image = file.read_bytes().await?;
    let recognized = recognizer
        .recognize(&image, &settings.languages, on_progress)
        .await?;
    drop(image);

    let lines = extract_lines(recognized.text());
    let document = build_spreadsheet(&lines, &settings.sheet_name)?;
    delivery.deliver(&document, &settings.output_file_name)?;

    Ok(RunReport {
        file_name: file.name(),
        line_count: lines.len(),
        output_file_name: settings.output_file_name.clone(),
        output_size: document.bytes().len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::MemoryDelivery;
    use crate::recognizer::ScriptedRecognizer;
    use crate::session::Phase;
    use crate::source::InMemoryFile;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Store = Rc<RefCell<Session<InMemoryFile>>>;

    fn store_with_file() -> Store {
        let store: Store = Rc::new(RefCell::new(Session::new()));
        store.borrow_mut().select_file(InMemoryFile::new("scan.png", vec![0u8; 4]));
        store
    }

    #[test]
    fn test_process_without_file_is_noop() {
        let store: Store = Rc::new(RefCell::new(Session::new()));
        let delivery = MemoryDelivery::new();
        let outcome = block_on(process(
            &store,
            &ScriptedRecognizer::new("Hello"),
            &delivery,
            &Settings::default(),
        ));
        assert!(matches!(outcome, Outcome::Skipped));
        assert!(delivery.delivered().is_empty());
        assert_eq!(store.borrow().phase(), Phase::Idle);
    }

    #[test]
    fn test_process_success_delivers_result_xlsx() {
        let store = store_with_file();
        let delivery = MemoryDelivery::new();
        let recognizer = ScriptedRecognizer::new("Hello\n \nWorld\n").with_progress([0.3, 1.0]);

        let outcome = block_on(process(&store, &recognizer, &delivery, &Settings::default()));

        let report = match outcome {
            Outcome::Delivered(report) => report,
            other => panic!("期待: Delivered, 実際: {:?}", other),
        };
        assert_eq!(report.file_name, "scan.png");
        assert_eq!(report.line_count, 2);
        assert_eq!(report.output_file_name, "result.xlsx");

        let delivered = delivery.delivered();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].0, "result.xlsx");
        assert_eq!(delivered[0].1.len(), report.output_size);

        let session = store.borrow();
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.progress(), 0.0);
        assert!(session.has_file());
    }

    #[test]
    fn test_process_recognition_failure_returns_to_idle() {
        let store = store_with_file();
        let delivery = MemoryDelivery::new();
        let recognizer = ScriptedRecognizer::failing("bad image").with_progress([0.5]);

        let outcome = block_on(process(&store, &recognizer, &delivery, &Settings::default()));

        assert!(matches!(outcome, Outcome::Failed(Error::Recognition(_))));
        assert!(delivery.delivered().is_empty());
        let session = store.borrow();
        assert!(!session.is_processing());
        assert_eq!(session.progress(), 0.0);
        assert!(session.can_process());
    }

    #[test]
    fn test_process_export_failure_returns_to_idle() {
        let store = store_with_file();
        let delivery = MemoryDelivery::new();
        let settings = Settings {
            sheet_name: "bad:name".into(),
            ..Default::default()
        };

        let outcome = block_on(process(&store, &ScriptedRecognizer::new("x"), &delivery, &settings));

        assert!(matches!(outcome, Outcome::Failed(Error::Export(_))));
        assert!(delivery.delivered().is_empty());
        assert!(store.borrow().can_process());
    }
}
