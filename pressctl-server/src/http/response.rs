//! Success envelope shared by all resource routes

use serde::Serialize;

/// `{"message": ..., "data": ...}` with either part optional
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Data without a message, used by list endpoints
    pub fn data(data: T) -> Self {
        Self {
            message: None,
            data: Some(data),
        }
    }

    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            data: None,
        }
    }
}

pub fn found(id: i32) -> String {
    format!("Data dengan ID {} berhasil ditemukan!", id)
}

pub fn created() -> String {
    "Data berhasil ditambahkan!".to_string()
}

pub fn updated(id: i32) -> String {
    format!("Data dengan ID {} berhasil diubah!", id)
}

pub fn deleted(id: i32) -> String {
    format!("Data dengan ID {} berhasil dihapus!", id)
}
