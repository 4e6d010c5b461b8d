//! Prompt construction for the feedback model.
//!
//! The prompt is plain text in Indonesian. It embeds the rubric description and
//! recommendation verbatim and tells the model the exact three-part structure
//! to produce. The structure is a request to the model; [`crate::sanitize`]
//! cleans up whatever markup slips through.

use crate::generator::FeedbackRequest;
use crate::rubric::{MAX_SCORE, RubricEntry};

/// Substituted when no note accompanies the request.
pub const NO_NOTE: &str = "Tidak ada.";

/// Label for the note line, chosen by who wrote it.
fn note_label(user_role: Option<&str>) -> &'static str {
    match user_role.map(|r| r.trim().to_ascii_lowercase()).as_deref() {
        Some("student" | "siswa") => "Catatan dari Siswa",
        _ => "Pesan Tambahan dari Guru",
    }
}

/// Builds the single prompt sent to the text generator.
pub fn build_prompt(request: &FeedbackRequest, entry: &RubricEntry) -> String {
    let note = request
        .note
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(NO_NOTE);
    let label = note_label(request.user_role.as_deref());
    let game = request.game.as_str();

    format!(
        r#"Anda adalah Asisten Guru virtual yang sangat ramah dan pandai memberi semangat.
Tugas Anda adalah membuat satu paragraf feedback untuk seorang siswa.
IKUTI INSTRUKSI DAN STRUKTUR DI BAWAH INI DENGAN SANGAT TEPAT. JANGAN MENGUBAH FORMATNYA.

Data untuk Feedback:
- Nama Game: "{game}"
- Skor Siswa: {score} dari {max}
- Deskripsi Kemampuan Siswa: "{description}"
- Rekomendasi untuk Siswa: "{recommendation}"
- {label}: "{note}"

Struktur Wajib:
1. Bagian Apresiasi: Mulai dengan kalimat pembuka yang hangat seperti "Kerja bagus di game {game}!".
2. Bagian Definisi Skor: Jelaskan kemampuan siswa berdasarkan skor. Sisipkan {label_lower} jika ada.
3. Bagian Rekomendasi: Tutup dengan kalimat rekomendasi yang menyemangati.

Gabungkan ketiga bagian menjadi satu paragraf yang mengalir dan enak dibaca.
Gunakan bahasa sederhana dan positif. Jangan pakai format markdown."#,
        score = request.score,
        max = MAX_SCORE,
        description = entry.description,
        recommendation = entry.recommendation,
        label_lower = label.to_lowercase(),
    )
}
