//! Curated list of common Khmer words shipped with the crate.
//!
//! Coverage is intentionally partial; hosts extend it at runtime through
//! [`SharedDictionary::add_words`](crate::dictionary::SharedDictionary::add_words)
//! or a word-list file.

pub const BUILTIN_WORDS: &[&str] = &[
    // Pronouns
    "ខ្ញុំ", "អ្នក", "គាត់", "យើង", "ពួកគេ", "ពួកយើង", "នាង", "វា", "លោក", "លោកស្រី", "បង", "ប្អូន",
    // Verbs
    "ស្រលាញ់", "ស្រឡាញ់", "ទៅ", "មក", "ញ៉ាំ", "ធ្វើ", "ធ្វើការ", "និយាយ", "អាន", "សរសេរ", "រៀន",
    "បង្រៀន", "ដឹង", "យល់", "មើល", "ស្តាប់", "ដើរ", "រត់", "ដេក", "ទិញ", "លក់", "ជួយ", "សួរ",
    "ឆ្លើយ", "ចាប់ផ្តើម", "បញ្ចប់",
    // Modals and aspect markers
    "ចង់", "អាច", "ត្រូវ", "គួរ", "កំពុង", "នឹង", "បាន", "ធ្លាប់", "មិន", "ទេ",
    // Connectors
    "ហើយ", "និង", "ប៉ុន្តែ", "ដែល", "ពីព្រោះ", "ព្រោះ", "ដូច្នេះ", "នៅ", "ក្នុង", "លើ", "ក្រោម",
    "ជាមួយ", "សម្រាប់", "ពី", "ដល់", "ជា", "មាន", "គឺ", "នេះ", "នោះ", "ទាំងអស់", "ណាស់",
    // Numerals
    "មួយ", "ពីរ", "បី", "បួន", "ប្រាំ", "ប្រាំមួយ", "ប្រាំពីរ", "ប្រាំបី", "ប្រាំបួន", "ដប់", "ម្ភៃ",
    "រយ", "ពាន់", "ម៉ឺន", "សែន", "លាន",
    // Time
    "ថ្ងៃ", "ថ្ងៃនេះ", "ម្សិលមិញ", "ស្អែក", "ឆ្នាំ", "ខែ", "សប្តាហ៍", "ម៉ោង", "នាទី", "ពេល",
    "ឥឡូវ", "ព្រឹក", "ល្ងាច", "យប់",
    // Nouns
    "សៀវភៅ", "សាលា", "សាលារៀន", "សិស្ស", "គ្រូ", "ភាសា", "ខ្មែរ", "ភាសាខ្មែរ", "កម្ពុជា",
    "ប្រទេស", "ភ្នំពេញ", "ផ្ទះ", "ទឹក", "បាយ", "ម្ហូប", "មនុស្ស", "ក្មេង", "ឪពុក", "ម្តាយ",
    "កូន", "គ្រួសារ", "មិត្ត", "ការ", "ការងារ",
    // Adjectives and greetings
    "សួស្តី", "អរគុណ", "ល្អ", "ធំ", "តូច", "ច្រើន", "តិច", "ថ្មី", "ចាស់", "ស្អាត", "លឿន", "យឺត",
    // Reading and study terms
    "អត្ថបទ", "ពាក្យ", "ល្បឿន", "ការអាន", "សំណួរ", "ចម្លើយ", "ប្រយោគ", "ឯកសារ", "មេរៀន",
    "លំហាត់", "ពិន្ទុ", "កម្រិត", "លទ្ធផល",
];
