//! The standard literacy rubric: three levels, scores 0 through 10.

use super::RubricKey;

/// One row of the static table: key, category, description, recommendation.
pub(super) type Row = (RubricKey, &'static str, &'static str, &'static str);

pub(super) const STANDARD_ROWS: &[Row] = &[
    // Level 1: finding explicit information in a text.
    (
        RubricKey::new(1, 10),
        "Sangat Baik (Optimal)",
        "Siswa mampu menemukan semua informasi tersurat dalam teks dengan tepat dan konsisten. Ia mampu menggunakan kata kunci, membaca cepat, dan memilah detail penting dari teks tanpa kesalahan. Pemahamannya menunjukkan keterampilan literasi membaca literal yang matang.",
        "Pertahankan dengan soal pengayaan: berikan teks yang lebih panjang atau teks jamak untuk melatih kecepatan dan ketepatan.",
    ),
    (
        RubricKey::new(1, 9),
        "Sangat Baik",
        "Hampir seluruh informasi dapat ditemukan dengan akurat. Hanya ada 1 kesalahan kecil, misalnya kehilangan detail kata kunci atau salah menafsirkan satu pertanyaan. Secara umum, siswa sudah menguasai strategi menemukan informasi.",
        "Latihan analisis detail: minta siswa menjelaskan mengapa ia memilih jawaban tertentu, untuk memperkuat akurasi.",
    ),
    (
        RubricKey::new(1, 8),
        "Baik",
        "Siswa dapat menemukan sebagian besar informasi dengan benar. Masih ada 2 kesalahan, biasanya pada detail kecil atau informasi tersurat yang tersebar. Kemampuan membaca literal sudah baik, namun belum stabil.",
        "Dorong strategi scanning: latih siswa mencari kata kunci dalam teks sebelum membaca detail keseluruhan.",
    ),
    (
        RubricKey::new(1, 7),
        "Baik",
        "Siswa mampu menjawab lebih dari separuh soal dengan benar, tetapi masih ada 3 kesalahan yang menunjukkan kurang teliti atau salah memilih informasi yang relevan. Siswa kadang melewatkan informasi eksplisit.",
        "Gunakan latihan menyorot teks: minta siswa menandai kalimat kunci dalam bacaan sebelum menjawab.",
    ),
    (
        RubricKey::new(1, 6),
        "Cukup",
        "Kemampuan menemukan informasi masih terbatas. Siswa sering keliru memilih detail yang tidak relevan. Ia memahami teks secara umum, tetapi kurang cermat dalam menjawab.",
        "Terapkan latihan guided reading: guru memberi petunjuk langkah demi langkah untuk menemukan jawaban dalam teks.",
    ),
    (
        RubricKey::new(1, 5),
        "Cukup",
        "Siswa hanya mampu menemukan separuh informasi. Pemahaman literalnya masih dangkal, sering salah memahami pertanyaan dasar (siapa, kapan, di mana).",
        "Berikan soal latihan bertahap dengan teks pendek dan pertanyaan sederhana agar siswa terbiasa mengenali detail tersurat.",
    ),
    (
        RubricKey::new(1, 4),
        "Kurang",
        "Siswa kesulitan menemukan informasi; hanya sebagian kecil yang benar. Jawaban benar biasanya hanya pada pertanyaan yang sangat jelas dalam teks.",
        "Gunakan peta konsep teks: minta siswa membuat tabel sederhana (tokoh, waktu, tempat, kejadian) agar lebih sistematis.",
    ),
    (
        RubricKey::new(1, 3),
        "Kurang",
        "Kemampuan siswa masih rendah, hanya dapat menjawab benar beberapa soal. Sering tidak dapat mengaitkan pertanyaan dengan bagian teks yang sesuai.",
        "Lakukan latihan membaca terarah: guru menunjuk kalimat dalam teks dan siswa menjawab pertanyaan langsung darinya.",
    ),
    (
        RubricKey::new(1, 2),
        "Sangat Kurang",
        "Siswa sangat kesulitan menemukan informasi bahkan ketika eksplisit. Kesalahan lebih banyak karena tidak bisa mengidentifikasi kata kunci.",
        "Latihan membaca bersama (shared reading): guru membaca teks keras-keras dan membimbing siswa menemukan jawaban.",
    ),
    (
        RubricKey::new(1, 1),
        "Sangat Kurang",
        "Siswa hanya mampu menemukan sedikit informasi. Keterampilan literasi dasar (mengenali detail eksplisit) sangat terbatas.",
        "Fokus pada latihan intensif: berikan teks sangat pendek (2–3 kalimat) dengan pertanyaan langsung (siapa, di mana).",
    ),
    (
        RubricKey::new(1, 0),
        "Tidak Menguasai",
        "Siswa tidak mampu menjawab benar sama sekali. Menunjukkan hambatan serius dalam memahami bacaan literal dan mengakses informasi dasar.",
        "Berikan intervensi remedial: mulai dari teks sederhana, latihan membaca bersama, dan penggunaan media visual untuk membantu pemahaman.",
    ),
    // Level 2: interpreting and integrating information.
    (
        RubricKey::new(2, 10),
        "Sangat Baik (Optimal)",
        "Siswa mampu menginterpretasi dan mengintegrasi seluruh informasi dengan akurat. Dapat menjelaskan ide pokok dan pendukung, menyusun inferensi logis, serta membuat prediksi dengan tepat. Menunjukkan keterampilan bernalar tinggi dalam membaca teks tunggal maupun jamak.",
        "Berikan tugas pengayaan berupa analisis teks jamak (artikel + infografis) agar keterampilan integrasi lebih kompleks.",
    ),
    (
        RubricKey::new(2, 9),
        "Sangat Baik",
        "Hampir seluruh jawaban benar, hanya ada 1 kesalahan kecil. Siswa mampu menyimpulkan ide dan membuat inferensi dengan sangat baik, namun sesekali kurang teliti dalam detail.",
        "Latih dengan teks lebih bervariasi (ilmiah, sosial, personal) agar kemampuan konsisten dalam semua konteks.",
    ),
    (
        RubricKey::new(2, 8),
        "Baik",
        "Sebagian besar soal dijawab benar. Siswa mampu menemukan ide pokok dan menyimpulkan isi teks, tetapi ada 2 kesalahan yang menunjukkan kelemahan dalam integrasi atau membandingkan informasi.",
        "Gunakan latihan membandingkan 2 teks untuk memperkuat keterampilan integrasi.",
    ),
    (
        RubricKey::new(2, 7),
        "Baik",
        "Lebih dari separuh soal dijawab benar. Siswa bisa menyimpulkan isi teks, tetapi kurang tepat dalam membuat prediksi atau menghubungkan informasi antar unsur pendukung (grafik/tabel).",
        "Terapkan latihan visual literacy: minta siswa membaca teks sekaligus grafik untuk membuat kesimpulan.",
    ),
    (
        RubricKey::new(2, 6),
        "Cukup",
        "Siswa mampu menjawab lebih dari setengah soal, namun sering salah saat menyusun inferensi. Kesimpulan yang dibuat masih parsial dan kadang tidak logis.",
        "Latihan menyusun inferensi eksplisit: guru memberi petunjuk cara menarik kesimpulan dari dua kalimat teks.",
    ),
    (
        RubricKey::new(2, 5),
        "Cukup",
        "Hanya separuh informasi diintegrasikan dengan benar. Siswa cenderung hanya memahami ide pokok tanpa mendalami hubungan antarbagian teks.",
        "Berikan soal bertingkat dari ide pokok → ide pendukung → kesimpulan untuk melatih berpikir runtut.",
    ),
    (
        RubricKey::new(2, 4),
        "Kurang",
        "Siswa hanya bisa menjawab benar sebagian kecil. Pemahaman ide pokok ada, tetapi gagal mengintegrasikan detail atau membandingkan informasi.",
        "Gunakan peta konsep teks untuk membantu siswa melihat hubungan antaride.",
    ),
    (
        RubricKey::new(2, 3),
        "Kurang",
        "Siswa hanya dapat menjawab sedikit soal dengan benar. Kesimpulan yang dibuat sering tidak sesuai teks. Masih kesulitan mengenali ide pendukung.",
        "Lakukan latihan membaca terarah dengan pertanyaan panduan (misalnya: “apa ide pokok?”, “apa buktinya?”).",
    ),
    (
        RubricKey::new(2, 2),
        "Sangat Kurang",
        "Siswa sangat kesulitan menyusun inferensi, kesimpulan salah meskipun teks jelas. Hanya mampu menjawab pertanyaan literal sederhana.",
        "Terapkan shared reading dengan guru: diskusikan bersama cara menemukan ide pokok dan menyusun kesimpulan.",
    ),
    (
        RubricKey::new(2, 1),
        "Sangat Kurang",
        "Hampir tidak mampu membuat interpretasi. Hanya menjawab benar 1 soal karena kebetulan memahami detail sangat sederhana.",
        "Fokus pada latihan ide pokok teks pendek sebelum melatih integrasi informasi.",
    ),
    (
        RubricKey::new(2, 0),
        "Tidak Menguasai",
        "Tidak dapat menginterpretasi atau mengintegrasi informasi sama sekali. Tidak bisa menjelaskan ide pokok maupun menyusun inferensi.",
        "Berikan intervensi remedial intensif: mulai dari teks sangat pendek dengan pertanyaan sederhana dan bimbingan guru.",
    ),
    // Level 3: evaluating and reflecting on a text.
    (
        RubricKey::new(3, 10),
        "Sangat Baik (Optimal)",
        "Siswa mampu menilai akurasi dan kredibilitas teks secara kritis, serta melakukan refleksi mendalam yang relevan dengan pengalaman nyata. Menunjukkan keterampilan berpikir kritis dan kesadaran reflektif yang matang.",
        "Berikan tugas pengayaan berupa analisis perbandingan antara teks dan situasi nyata (misalnya berita vs pengalaman pribadi).",
    ),
    (
        RubricKey::new(3, 9),
        "Sangat Baik",
        "Hampir seluruh jawaban benar, hanya ada 1 kekeliruan kecil. Siswa mampu mengevaluasi isi teks dengan baik dan merefleksikan isinya, meski sesekali kurang mendalam.",
        "Latihan analisis sumber ganda agar siswa lebih konsisten dalam mengevaluasi kredibilitas.",
    ),
    (
        RubricKey::new(3, 8),
        "Baik",
        "Sebagian besar soal dijawab benar. Siswa dapat menilai teks dan memberikan refleksi, namun 2 kesalahan menunjukkan pemahaman kritis yang belum sepenuhnya konsisten.",
        "Dorong siswa untuk menyebutkan alasan eksplisit setiap kali memberi evaluasi.",
    ),
    (
        RubricKey::new(3, 7),
        "Baik",
        "Lebih dari separuh soal dijawab benar. Siswa dapat menilai sebagian aspek isi teks, tetapi refleksi sering dangkal atau kurang relevan dengan konteks pribadi.",
        "Terapkan latihan diskusi reflektif agar siswa terbiasa mengaitkan isi teks dengan pengalaman.",
    ),
    (
        RubricKey::new(3, 6),
        "Cukup",
        "Siswa mampu mengevaluasi beberapa isi teks, tetapi masih kesulitan menilai kredibilitas sumber atau membangun refleksi yang bermakna.",
        "Lakukan latihan identifikasi bias dalam teks agar siswa lebih kritis.",
    ),
    (
        RubricKey::new(3, 5),
        "Cukup",
        "Hanya separuh soal dijawab benar. Evaluasi dan refleksi masih terbatas, cenderung hanya menyebutkan ulang isi teks tanpa analisis.",
        "Gunakan latihan tanya-jawab kritis: “Apakah teks ini bisa dipercaya? Mengapa?”",
    ),
    (
        RubricKey::new(3, 4),
        "Kurang",
        "Siswa hanya mampu menjawab sebagian kecil dengan benar. Evaluasi teks lemah, refleksi tidak relevan atau sangat dangkal.",
        "Berikan contoh evaluasi sederhana dari guru, lalu minta siswa meniru pola berpikirnya.",
    ),
    (
        RubricKey::new(3, 3),
        "Kurang",
        "Siswa kesulitan menilai isi teks. Jawaban refleksi sering tidak sesuai konteks, cenderung menebak.",
        "Latih dengan teks singkat dan pertanyaan evaluatif langsung (misalnya: “apakah informasi ini benar?”).",
    ),
    (
        RubricKey::new(3, 2),
        "Sangat Kurang",
        "Siswa tidak mampu mengevaluasi isi dengan tepat, refleksi minim bahkan tidak ada.",
        "Terapkan shared reading evaluatif: guru membaca teks, lalu bersama-sama menilai keakuratan informasi.",
    ),
    (
        RubricKey::new(3, 1),
        "Sangat Kurang",
        "Siswa hampir tidak mampu melakukan evaluasi atau refleksi. Hanya menjawab benar 1 soal karena kebetulan memahami detail sederhana.",
        "Fokus pada latihan refleksi pengalaman pribadi sederhana sebelum mengaitkan dengan teks.",
    ),
    (
        RubricKey::new(3, 0),
        "Tidak Menguasai",
        "Tidak bisa mengevaluasi atau merefleksi sama sekali. Menunjukkan hambatan serius dalam berpikir kritis dan reflektif.",
        "Intervensi remedial: gunakan teks sangat sederhana (cerita pendek, peribahasa) untuk melatih refleksi dasar.",
    ),
];
