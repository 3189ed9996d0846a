//! 열교환기 관련 계산 모듈 모음. 현재는 이중관(bitubular) 열교환기 LMTD만 다룬다.

pub mod lmtd;

pub use lmtd::*;
