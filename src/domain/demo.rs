//! Static demo data for the mock chat list.

use super::chat::ChatRow;
use crate::render::color::Rgb;

/// Builds the demo conversation list in display order.
///
/// Three named chats followed by fifteen numbered group chats, the same set
/// a messaging client would show after a fresh sync.
pub fn demo_rows() -> Vec<ChatRow> {
    let mut rows = vec![
        ChatRow::new(
            "文件传输助手",
            "[图片] IMG_2026.jpg",
            "17:52",
            Rgb::new(255, 170, 0),
            0,
        ),
        ChatRow::new("腾讯新闻", "Qt 6.8 发布了！", "14:30", Rgb::new(0, 120, 215), 1),
        ChatRow::new("产品经理", "今晚加班吗？", "12:05", Rgb::new(100, 100, 100), 5),
    ];

    for i in 0..15 {
        rows.push(ChatRow::new(
            format!("群聊 {i}"),
            "收到请回复",
            "10:00",
            Rgb::new(192, 192, 192),
            0,
        ));
    }

    rows
}
