use crate::modules::jobs::domain::entities::Job;

/// Built-in fallback record set
///
/// Used only when the fetch fails and no cache entry exists at all, so a
/// first visit without connectivity still shows something instead of an
/// empty screen. Never written to the cache: seeding must not mask a
/// transient outage beyond its actual duration.
pub fn seed_jobs() -> Vec<Job> {
    vec![
        Job {
            id: "seed-1".to_string(),
            title: "Penulis Artikel Lepas".to_string(),
            pay: 150000,
            category: "Penulisan".to_string(),
            verified: true,
            syarat: "Contoh tulisan, komunikatif".to_string(),
            description: "Menulis artikel pendek untuk blog, topik bebas.".to_string(),
            link: String::new(),
        },
        Job {
            id: "seed-2".to_string(),
            title: "Admin Media Sosial".to_string(),
            pay: 200000,
            category: "Media Sosial".to_string(),
            verified: false,
            syarat: "Aktif di Instagram dan TikTok".to_string(),
            description: "Menjadwalkan posting dan membalas komentar.".to_string(),
            link: String::new(),
        },
        Job {
            id: "seed-3".to_string(),
            title: "Kurir Paket Harian".to_string(),
            pay: 100000,
            category: "Lapangan".to_string(),
            verified: false,
            syarat: "Motor sendiri, SIM C".to_string(),
            description: "Antar paket area dalam kota, dibayar per hari.".to_string(),
            link: String::new(),
        },
    ]
}
