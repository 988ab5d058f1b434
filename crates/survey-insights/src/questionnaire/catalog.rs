use super::domain::{QuestionDef, QuestionKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Header labels of the questionnaire export, exactly as they appear in the
/// CSV. Analyses address questions through these constants.
pub mod labels {
    pub const TIMESTAMP: &str = "タイムスタンプ";
    pub const USER_ID: &str = "ユーザーID";
    pub const AGE_BRACKET: &str = "年代をお選びください。";
    pub const GENDER: &str = "性別をお選びください。";
    pub const REGION: &str = "お住まいの地域をお選びください。";
    pub const HIKING_HISTORY: &str = "あなたの登山歴に最も近いものをお選びください。";
    pub const HIKING_FREQUENCY: &str =
        "直近1年以内に、どのくらいの頻度で登山・ハイキングをしていますか？";
    pub const ENROLL_TIMING: &str =
        "ヤマップグループの「外あそびレジャー保険」「山歩保険」にご加入されたタイミングについて教えてください。";
    pub const FIRST_ENROLLMENT: &str = "登山保険への加入は今回が初めてですか？";
    pub const CONTRACT_STATUS: &str = "以下から、現在のご加入状況について1つお選びください。";
    pub const PROCEDURE_EASE: &str = "YAMAPアウトドア保険への加入手続きは簡単でしたか？";
    pub const RECOMMENDATION: &str =
        "加入中のYAMAPアウトドア保険を家族や友人、山仲間に勧めたいですか？";
    pub const ENROLL_REASONS: &str =
        "あなたがYAMAPアウトドア保険に加入した理由を教えてください。（当てはまるものに全てチェックをしてください）[MA]";
    pub const AWARENESS_CHANNELS: &str =
        "YAMAPアウトドア保険を知ったきっかけをすべてお選びください。（複数選択可）[MA]";
    pub const FELT_BENEFIT: &str =
        "保険加入後、保険から感じるメリットとして、以下のどれを最も実感しますか？";
    pub const DECIDING_INFO: &str =
        "保険のご案内ページで、加入の「決め手となった情報」を1つ選んでお答えください。";
    pub const SWITCH_TRIGGERS: &str =
        "短期契約の後に1年契約に切り替えようと思ったきっかけを教えてください。（複数選択可）[MA]";
    pub const SWITCH_TIMING: &str = "実際に短期契約の後に1年契約に切り替えたのはいつですか？";
    pub const SWITCH_HESITATIONS: &str = "どのような点で迷われましたか？（複数選択可）[MA]";
    pub const FUTURE_INTENTION: &str = "今後、1年契約に切り替えるご意向はありますか？";
    pub const YEAR_DECIDING_FACTORS: &str =
        "1年契約を選択した決め手を教えてください。（当てはまるものに全てチェックをしてください）[MA]";
    pub const CANCEL_REASONS: &str = "解約した理由を上位3つまで選んで教えてください。";
    pub const CANCEL_DETAILS: &str = "上記で選んだ選択肢について、より具体的に教えてください。";
}

/// Answer fragments of the contract-status question that subgroup filters
/// match on.
pub mod status {
    pub const YEAR_CONTRACT: &str = "1年契約";
    pub const SHORT_TERM_7DAY: &str = "7日契約";
    pub const SHORT_TERM_30DAY: &str = "30日契約";
    pub const LEISURE_YEAR_ACTIVE: &str = "外あそびレジャー保険の1年契約に加入し、現在も加入中";
    pub const CONTRACT_ENDED: &str = "契約が終了している";
    pub const CANCELLED: &str = "解約";
}

/// Answer values of the future-intention question.
pub mod intention {
    pub const NOT_MUCH_CONSIDERED: &str = "あまり検討していない";
    pub const NOT_AT_ALL_CONSIDERED: &str = "全く検討していない";
}

const QUESTIONS: &[(&str, QuestionKind)] = &[
    (labels::TIMESTAMP, QuestionKind::Timestamp),
    (labels::USER_ID, QuestionKind::FreeText),
    (labels::AGE_BRACKET, QuestionKind::SingleChoice),
    (labels::GENDER, QuestionKind::SingleChoice),
    (labels::REGION, QuestionKind::SingleChoice),
    (labels::HIKING_HISTORY, QuestionKind::SingleChoice),
    (labels::HIKING_FREQUENCY, QuestionKind::SingleChoice),
    (labels::ENROLL_TIMING, QuestionKind::SingleChoice),
    (labels::FIRST_ENROLLMENT, QuestionKind::SingleChoice),
    (labels::CONTRACT_STATUS, QuestionKind::SingleChoice),
    (labels::PROCEDURE_EASE, QuestionKind::SingleChoice),
    (labels::RECOMMENDATION, QuestionKind::SingleChoice),
    (labels::ENROLL_REASONS, QuestionKind::MultiChoice),
    (labels::AWARENESS_CHANNELS, QuestionKind::MultiChoice),
    (labels::FELT_BENEFIT, QuestionKind::SingleChoice),
    (labels::DECIDING_INFO, QuestionKind::SingleChoice),
    (labels::SWITCH_TRIGGERS, QuestionKind::MultiChoice),
    (labels::SWITCH_TIMING, QuestionKind::SingleChoice),
    (labels::SWITCH_HESITATIONS, QuestionKind::MultiChoice),
    (labels::FUTURE_INTENTION, QuestionKind::SingleChoice),
    (labels::YEAR_DECIDING_FACTORS, QuestionKind::MultiChoice),
    (labels::CANCEL_REASONS, QuestionKind::MultiChoice),
    (labels::CANCEL_DETAILS, QuestionKind::FreeText),
];

static KIND_MAP: OnceLock<HashMap<&'static str, QuestionKind>> = OnceLock::new();

fn kind_map() -> &'static HashMap<&'static str, QuestionKind> {
    KIND_MAP.get_or_init(|| QUESTIONS.iter().copied().collect())
}

/// The respondent attributes analyses cross-tabulate by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeAxis {
    AgeBracket,
    Gender,
    Region,
    HikingHistory,
    HikingFrequency,
}

impl AttributeAxis {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::AgeBracket,
            Self::Gender,
            Self::Region,
            Self::HikingHistory,
            Self::HikingFrequency,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::AgeBracket => "年代",
            Self::Gender => "性別",
            Self::Region => "地域",
            Self::HikingHistory => "登山歴",
            Self::HikingFrequency => "登山頻度",
        }
    }

    pub const fn question(self) -> &'static str {
        match self {
            Self::AgeBracket => labels::AGE_BRACKET,
            Self::Gender => labels::GENDER,
            Self::Region => labels::REGION,
            Self::HikingHistory => labels::HIKING_HISTORY,
            Self::HikingFrequency => labels::HIKING_FREQUENCY,
        }
    }
}

/// The declared questionnaire: every question label the analyses touch with
/// its answer kind.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<QuestionDef>,
}

impl QuestionCatalog {
    pub fn standard() -> Self {
        let questions = QUESTIONS
            .iter()
            .map(|&(label, kind)| QuestionDef { label, kind })
            .collect();
        Self { questions }
    }

    pub fn questions(&self) -> &[QuestionDef] {
        &self.questions
    }

    /// Declared kind of a question label; `None` for labels the catalog
    /// does not know, which callers treat as free text.
    pub fn kind_of(&self, label: &str) -> Option<QuestionKind> {
        kind_map().get(label).copied()
    }
}
