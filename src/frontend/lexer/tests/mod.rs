//! Lexer tests module
//!
//! - basic: 标识符、整数、空白符与位置
//! - keywords: 关键字测试
//! - operators: 运算符与分隔符测试
//! - errors: 非法字符测试
