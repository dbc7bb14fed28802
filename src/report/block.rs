// src/report/block.rs
// =============================================================================
// Renders the info block written into the README.
//
// Output shape (window strategy):
//
//   <!-- INFO-START -->
//   📌 <strong>Últimas Atualizações</strong><br>
//   📊 <strong>Total de projetos:</strong> 12<br>
//   🧠 <strong>Projetos por linguagem:</strong><br>
//   • Rust: 7<br>
//   • Go: 5<br>
//   🔄 <strong>Atualização automática:</strong> a cada 30 minutos<br>
//   ⏭️ <strong>Próxima atualização prevista:</strong> 16/10/2026 entre 10:25 e 10:45 (Horário de Brasília)<br>
//   ⏱️ <strong>Última atualização:</strong> 16/10/2026 10:00:00 (Horário de Brasília)
//   <!-- INFO-END -->
// =============================================================================

pub const START_MARKER: &str = "<!-- INFO-START -->";
pub const END_MARKER: &str = "<!-- INFO-END -->";

/// All the values that go into one block
#[derive(Debug)]
pub struct ReportBlock<'a> {
    pub total: usize,
    pub language_lines: &'a [String],
    pub cadence_line: &'a str,
    pub next_update: Option<&'a str>,
    pub last_update: &'a str,
    pub tz_label: &'a str,
}

pub fn render_block(report: &ReportBlock<'_>) -> String {
    let mut lines = vec![
        START_MARKER.to_string(),
        "📌 <strong>Últimas Atualizações</strong><br>".to_string(),
        format!("📊 <strong>Total de projetos:</strong> {}<br>", report.total),
        "🧠 <strong>Projetos por linguagem:</strong><br>".to_string(),
        format!("{}<br>", report.language_lines.join("<br>\n")),
        report.cadence_line.to_string(),
    ];

    if let Some(next) = report.next_update {
        lines.push(format!(
            "⏭️ <strong>Próxima atualização prevista:</strong> {} ({})<br>",
            next, report.tz_label
        ));
    }

    lines.push(format!(
        "⏱️ <strong>Última atualização:</strong> {} ({})",
        report.last_update, report.tz_label
    ));
    lines.push(END_MARKER.to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_next_update() {
        let languages = vec!["• Go: 3".to_string(), "• Rust: 2".to_string()];
        let block = render_block(&ReportBlock {
            total: 5,
            language_lines: &languages,
            cadence_line: "🔄 <strong>Atualização automática:</strong> a cada 30 minutos<br>",
            next_update: Some("16/10/2026 entre 10:25 e 10:45"),
            last_update: "16/10/2026 10:00:00",
            tz_label: "Horário de Brasília",
        });

        let expected = "<!-- INFO-START -->\n\
            📌 <strong>Últimas Atualizações</strong><br>\n\
            📊 <strong>Total de projetos:</strong> 5<br>\n\
            🧠 <strong>Projetos por linguagem:</strong><br>\n\
            • Go: 3<br>\n\
            • Rust: 2<br>\n\
            🔄 <strong>Atualização automática:</strong> a cada 30 minutos<br>\n\
            ⏭️ <strong>Próxima atualização prevista:</strong> 16/10/2026 entre 10:25 e 10:45 (Horário de Brasília)<br>\n\
            ⏱️ <strong>Última atualização:</strong> 16/10/2026 10:00:00 (Horário de Brasília)\n\
            <!-- INFO-END -->";
        assert_eq!(block, expected);
    }

    #[test]
    fn test_render_without_next_update() {
        let languages = vec!["• Nenhuma linguagem detectada".to_string()];
        let block = render_block(&ReportBlock {
            total: 0,
            language_lines: &languages,
            cadence_line: "⏸️ <strong>Atualização automática:</strong> pausada temporariamente<br>",
            next_update: None,
            last_update: "01/01/2026 00:00:00",
            tz_label: "UTC-3",
        });

        assert!(block.starts_with(START_MARKER));
        assert!(block.ends_with(END_MARKER));
        assert!(!block.contains("Próxima atualização"));
        assert!(block.contains("• Nenhuma linguagem detectada<br>\n⏸️"));
        assert!(block.contains("01/01/2026 00:00:00 (UTC-3)"));
    }
}
