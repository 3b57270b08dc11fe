//! Assembles the fixed project document structure for a topic.
//!
//! One document per call: title page, table of contents, then the five
//! standard sections with placeholder bodies. The layout module supplies
//! page geometry and the body formatting profile.

use serde_json::Value;

use crate::docx::{Document, TableOfContents};
use crate::error::Result;
use crate::layout;

/// Document title on the title page.
const TITLE: &str = "Итоговый проект";
/// Title-page information lines. These stay unformatted; only section
/// bodies receive the formatting profile.
const INFO_LINES: [&str; 3] = [
    "Выполнил: Фамилия Имя, 9 класс",
    "Руководитель: Фамилия Имя, учитель",
    "Год: 2023",
];
/// Heading above the table of contents.
const TOC_HEADING: &str = "Содержание";

/// The five standard sections, in order, with their placeholder bodies.
const SECTIONS: [(&str, &str); 5] = [
    (
        "Введение",
        "Введение должно содержать обоснование выбора темы, актуальность, цель и задачи проекта.",
    ),
    (
        "Основная часть",
        "Основная часть включает теоретическую и практическую части. Здесь вы описываете свои исследования и результаты.",
    ),
    (
        "Заключение",
        "Заключение содержит выводы по проекту, рекомендации и возможные перспективы дальнейшего исследования.",
    ),
    (
        "Список литературы",
        "1. Автор, Название книги, Год издания.\n2. Автор, Название статьи, Год публикации.",
    ),
    (
        "Приложения",
        "Приложения могут включать дополнительные материалы: таблицы, графики, фотографии и т.д.",
    ),
];

/// Build the complete project document for a topic.
///
/// The topic is inserted verbatim, empty strings included. The plan is
/// accepted for forward compatibility and never read.
pub fn build(topic: &str, _plan: Option<&Value>) -> Result<Document> {
    let mut doc = Document::new();
    layout::configure_page(&mut doc);

    // Title page
    doc.add_heading(TITLE, 0)?;
    doc.add_heading(topic, 1)?;
    for line in INFO_LINES {
        doc.add_paragraph_with_text(line);
    }
    doc.add_page_break();

    // Table of contents
    doc.add_heading(TOC_HEADING, 1)?;
    doc.add_toc_paragraph(&TableOfContents::new().field_instruction());
    doc.add_page_break();

    // Sections
    for (heading, body) in SECTIONS {
        doc.add_heading(heading, 1)?;
        let para = doc.add_paragraph_with_text(body);
        layout::format_paragraph(para);
    }

    Ok(doc)
}
