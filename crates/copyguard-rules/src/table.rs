//! Built-in rule table for Japanese advertising copy
//!
//! Two regimes are covered:
//! - 薬機法 (REGULATED_EFFICACY): medical or therapeutic efficacy claims,
//!   which only licensed pharmaceuticals may make
//! - 景表法 (MISLEADING_CLAIM): unsubstantiated superiority, misleading
//!   prices or time limits, and unsubstantiated absolutes
//!
//! Rules are data. Each carries a sample sentence it must flag, which is
//! checked when the table is compiled. Declaration order is emission order.

use copyguard_core::{Category, Severity};

use crate::matcher::RulePattern;
use crate::rule::RuleSpec;

/// Static pattern source
#[derive(Debug, Clone, Copy)]
pub enum PatternDef {
    Regex(&'static str),
    Literals(&'static [&'static str]),
}

/// Static rule definition
#[derive(Debug, Clone, Copy)]
pub struct RuleDef {
    pub id: &'static str,
    pub category: Category,
    pub severity: Severity,
    pub pattern: PatternDef,
    pub suggestion: &'static str,
    pub example: &'static str,
}

impl RuleDef {
    /// Owned, declarative form of this definition
    pub fn to_spec(&self) -> RuleSpec {
        let pattern = match self.pattern {
            PatternDef::Regex(source) => RulePattern::Regex(source.to_string()),
            PatternDef::Literals(phrases) => {
                RulePattern::Literals(phrases.iter().map(|p| p.to_string()).collect())
            }
        };

        RuleSpec {
            id: self.id.to_string(),
            category: self.category,
            severity: self.severity,
            pattern,
            suggestion: self.suggestion.to_string(),
            example: Some(self.example.to_string()),
            enabled: true,
        }
    }
}

/// Name of the built-in rule set
pub const BUILTIN_NAME: &str = "ja-advertising";

use Category::{MisleadingClaim, RegulatedEfficacy};
use PatternDef::{Literals, Regex};
use Severity::{High, Medium};

/// The built-in rules, efficacy rules first
pub const BUILTIN_RULES: &[RuleDef] = &[
    // Absolute cure and healing language
    RuleDef {
        id: "efficacy.cure",
        category: RegulatedEfficacy,
        severity: High,
        pattern: Regex("治る|治ります|治し"),
        suggestion: "「調子を整える」「サポートする」等に変更",
        example: "このサプリで肌荒れが治る",
    },
    RuleDef {
        id: "efficacy.complete_cure",
        category: RegulatedEfficacy,
        severity: High,
        pattern: Literals(&["完治"]),
        suggestion: "使用を避けてください",
        example: "たった一週間で完治しました",
    },
    RuleDef {
        id: "efficacy.treatment",
        category: RegulatedEfficacy,
        severity: High,
        pattern: Literals(&["治療"]),
        suggestion: "医薬品以外では使用不可。「ケア」「お手入れ」に変更",
        example: "ニキビ治療にぴったり",
    },
    RuleDef {
        id: "efficacy.panacea",
        category: RegulatedEfficacy,
        severity: High,
        pattern: Literals(&["万能薬", "特効薬"]),
        suggestion: "使用を避けてください",
        example: "冷え性の特効薬です",
    },
    RuleDef {
        id: "efficacy.absolute_cure",
        category: RegulatedEfficacy,
        severity: High,
        pattern: Regex("絶対に?治る|必ず治る|100[%％]治る"),
        suggestion: "断定的な治癒表現は使用不可",
        example: "これを飲めば必ず治る",
    },
    // Body-modification absolutes
    RuleDef {
        id: "efficacy.weight_loss",
        category: RegulatedEfficacy,
        severity: High,
        pattern: Regex("(?:絶対に?|必ず)?痩せ(?:る|ます)"),
        suggestion: "「スッキリをサポート」「ダイエットのお供に」に変更",
        example: "飲むだけで痩せる",
    },
    RuleDef {
        id: "efficacy.blemish",
        category: RegulatedEfficacy,
        severity: High,
        pattern: Regex("(?:シミ|シワ)(?:が消え|を消す)"),
        suggestion: "「目立たなくする」「ケアする」に変更",
        example: "塗るだけでシミが消える",
    },
    RuleDef {
        id: "efficacy.anti_aging",
        category: RegulatedEfficacy,
        severity: Medium,
        pattern: Literals(&["アンチエイジング"]),
        suggestion: "「エイジングケア」（年齢に応じたケア）に変更",
        example: "アンチエイジングの新習慣",
    },
    RuleDef {
        id: "efficacy.rejuvenation",
        category: RegulatedEfficacy,
        severity: High,
        pattern: Regex("若返[りる]"),
        suggestion: "「ハリ・ツヤのある肌へ」等に変更",
        example: "10歳若返る美容液",
    },
    RuleDef {
        id: "efficacy.detox",
        category: RegulatedEfficacy,
        severity: Medium,
        pattern: Literals(&["デトックス"]),
        suggestion: "「スッキリ」「リフレッシュ」に変更",
        example: "朝のデトックスドリンク",
    },
    // Physiological parameters
    RuleDef {
        id: "efficacy.immunity",
        category: RegulatedEfficacy,
        severity: High,
        pattern: Regex("免疫力[がを]?(?:上げ|高め|アップ|強化)"),
        suggestion: "「健康的な毎日をサポート」に変更",
        example: "免疫力アップの習慣",
    },
    RuleDef {
        id: "efficacy.blood_pressure",
        category: RegulatedEfficacy,
        severity: High,
        pattern: Regex("血圧[がを]?(?:下げ|下がる|低下)"),
        suggestion: "医薬品的表現のため使用不可",
        example: "毎日飲んで血圧が下がる",
    },
    RuleDef {
        id: "efficacy.blood_sugar",
        category: RegulatedEfficacy,
        severity: High,
        pattern: Regex("血糖値[がを]?(?:下げ|下がる|低下)"),
        suggestion: "医薬品的表現のため使用不可",
        example: "血糖値を下げるお茶",
    },
    // Medical vocabulary
    RuleDef {
        id: "efficacy.medication",
        category: RegulatedEfficacy,
        severity: High,
        pattern: Literals(&["処方", "投与", "服用"]),
        suggestion: "「使用」「摂取」「取り入れる」に変更",
        example: "1日2回服用してください",
    },
    RuleDef {
        id: "efficacy.diagnosis",
        category: RegulatedEfficacy,
        severity: High,
        pattern: Literals(&["診断", "診察"]),
        suggestion: "医療行為の表現は使用不可",
        example: "セルフ診断でわかる肌タイプ",
    },
    RuleDef {
        id: "efficacy.medically_proven",
        category: RegulatedEfficacy,
        severity: High,
        pattern: Literals(&["医学的に証明"]),
        suggestion: "「研究データあり」等、断定を避けた表現に",
        example: "医学的に証明された成分",
    },
    // Testimonials: personal framing does not exempt an efficacy claim
    RuleDef {
        id: "efficacy.testimonial_drink",
        category: RegulatedEfficacy,
        severity: Medium,
        pattern: Regex("飲んだら.*?(?:治った|消えた|なくなった)"),
        suggestion: "個人の感想でも効能効果の断定は避ける",
        example: "飲んだら頭痛が消えた",
    },
    RuleDef {
        id: "efficacy.testimonial_use",
        category: RegulatedEfficacy,
        severity: Medium,
        pattern: Regex("使ったら.*?(?:治った|消えた|なくなった)"),
        suggestion: "個人の感想でも効能効果の断定は避ける",
        example: "使ったら肌荒れがなくなった",
    },
    // Rankings, superlatives, first/only
    RuleDef {
        id: "misleading.ranking",
        category: MisleadingClaim,
        severity: High,
        pattern: Regex(r"(?:業界|世界|日本)?No\.?1|ナンバーワン|ナンバー1"),
        suggestion: "根拠となる調査データの明示が必要。根拠なしは使用不可",
        example: "売上No.1の美容液",
    },
    RuleDef {
        id: "misleading.superlative",
        category: MisleadingClaim,
        severity: Medium,
        pattern: Regex("(?:業界|世界|日本)?最高[のな]|最高品質|最高級"),
        suggestion: "根拠を明示するか「こだわりの品質」等に変更",
        example: "最高品質の茶葉を使用",
    },
    RuleDef {
        id: "misleading.first",
        category: MisleadingClaim,
        severity: Medium,
        pattern: Regex("(?:業界|世界|日本)?初[!！]?"),
        suggestion: "根拠となるデータ・出典の明示が必要",
        example: "業界初！新成分配合",
    },
    RuleDef {
        id: "misleading.only",
        category: MisleadingClaim,
        severity: Medium,
        pattern: Literals(&["唯一の", "唯一無二"]),
        suggestion: "客観的な根拠がない場合は使用不可",
        example: "唯一無二の香り",
    },
    // Absolute certainty
    RuleDef {
        id: "misleading.absolute",
        category: MisleadingClaim,
        severity: High,
        pattern: Regex("絶対に?(?:効く|効果|おすすめ|きれい|変わ)"),
        suggestion: "「絶対」を削除。個人差がある旨を付記",
        example: "絶対おすすめです",
    },
    RuleDef {
        id: "misleading.guaranteed",
        category: MisleadingClaim,
        severity: High,
        pattern: Regex("必ず(?:効[くき]|変わ|実感|結果)"),
        suggestion: "「必ず」を削除。「※個人差があります」を付記",
        example: "必ず実感できます",
    },
    RuleDef {
        id: "misleading.hundred_percent",
        category: MisleadingClaim,
        severity: High,
        pattern: Regex("100[%％](?:効果|満足|実感|安全)"),
        suggestion: "断定的な数値表現は根拠が必要",
        example: "100%満足保証",
    },
    RuleDef {
        id: "misleading.universal",
        category: MisleadingClaim,
        severity: Medium,
        pattern: Regex("誰でも(?:簡単に|すぐに)?(?:効果|結果|変化)"),
        suggestion: "「※個人差があります」「※効果には個人差があります」を付記",
        example: "誰でも簡単に結果が出る",
    },
    // Prices and time limits
    RuleDef {
        id: "misleading.free_now",
        category: MisleadingClaim,
        severity: Medium,
        pattern: Regex("今だけ(?:無料|タダ|0円)"),
        suggestion: "期間を明示する必要あり。「〜月〜日まで」を付記",
        example: "今だけ無料でお試し",
    },
    RuleDef {
        id: "misleading.double_pricing",
        category: MisleadingClaim,
        severity: Medium,
        pattern: Regex(r"(?:通常|定価).*?[0-9０-９]+.*?円.*?(?:→|が|を).*?(?:無料|0円|タダ)"),
        suggestion: "二重価格表示は根拠となる販売実績が必要",
        example: "通常3000円が今なら無料",
    },
    RuleDef {
        id: "misleading.discount",
        category: MisleadingClaim,
        severity: Medium,
        pattern: Regex("半額|(?:50|70|80|90)[%％]OFF"),
        suggestion: "割引前価格の販売実績（直近8週間等）が必要",
        example: "全品半額セール",
    },
    // Comparisons
    RuleDef {
        id: "misleading.competitor_comparison",
        category: MisleadingClaim,
        severity: High,
        pattern: Regex("他社(?:より|と比べて|に比べ).*?(?:優れ|上|良い|安い|高品質)"),
        suggestion: "比較広告は客観的データに基づく必要あり",
        example: "他社より浸透力が優れている",
    },
    RuleDef {
        id: "misleading.legacy_comparison",
        category: MisleadingClaim,
        severity: Medium,
        pattern: Regex(r"従来品(?:より|と比べて|に比べ).*?[0-9０-９]+倍"),
        suggestion: "比較データの根拠を明示する必要あり",
        example: "従来品と比べて保湿力が2倍",
    },
];

/// Owned specs for the built-in table, in declaration order
pub fn builtin_specs() -> Vec<RuleSpec> {
    BUILTIN_RULES.iter().map(RuleDef::to_spec).collect()
}
