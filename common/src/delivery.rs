//! 生成ファイルの受け渡し（ダウンロード）

use crate::error::Result;
use crate::types::SpreadsheetDocument;
use std::cell::RefCell;
use std::rc::Rc;

/// 生成したExcelをユーザーに渡す
pub trait Delivery {
    fn deliver(&self, document: &SpreadsheetDocument, file_name: &str) -> Result<()>;
}

/// 受け取ったファイルを保持するだけの Delivery
#[derive(Debug, Clone, Default)]
pub struct MemoryDelivery {
    delivered: Rc<RefCell<Vec<(String, Vec<u8>)>>>,
}

impl MemoryDelivery {
    pub fn new() -> Self {
        Self::default()
    }

    /// (ファイル名, バイト列) の一覧
    pub fn delivered(&self) -> Vec<(String, Vec<u8>)> {
        self.delivered.borrow().clone()
    }
}

impl Delivery for MemoryDelivery {
    fn deliver(&self, document: &SpreadsheetDocument, file_name: &str) -> Result<()> {
        self.delivered
            .borrow_mut()
            .push((file_name.to_string(), document.bytes().to_vec()));
        Ok(())
    }
}
