//! PravoDoc - Legal Document Generation Core
//!
//! This crate implements the document generation and usage-quota pipeline
//! of a legal-document assistant: rendering a filled-in template into plain
//! text, classifying that text into a GOST-structured document, serializing
//! it to DOCX or PDF, and gating generation against a persistent monthly
//! usage ledger. The messaging transport and payment processing are
//! external collaborators.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
