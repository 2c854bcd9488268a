use serde::Serialize;

use super::Gender;

/// A score-range bucket. A rule matches when `total >= min_total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRule {
    pub min_total: i32,
    pub name: &'static str,
    pub class_tag: &'static str,
    pub description: &'static str,
}

impl CategoryRule {
    /// Rules for the rated person's gender, sorted by descending `min_total`.
    pub fn rules(gender: Gender) -> &'static [CategoryRule] {
        match gender {
            Gender::Male => &MALE_CATEGORIES,
            Gender::Female => &FEMALE_CATEGORIES,
        }
    }

    /// The zero-floor "unfit" rule, always last in the table.
    pub fn catch_all(gender: Gender) -> &'static CategoryRule {
        let rules = Self::rules(gender);
        &rules[rules.len() - 1]
    }

    /// First rule in table order whose floor the total reaches.
    pub fn for_total(gender: Gender, total: i32) -> &'static CategoryRule {
        Self::rules(gender)
            .iter()
            .find(|rule| total >= rule.min_total)
            .unwrap_or_else(|| Self::catch_all(gender))
    }
}

const UNFIT_DESCRIPTION: &str = "Режим дистанции. Чёрная дыра для нервов, времени и денег. \
Переделать/спасти нельзя — дефолт. Полный игнор или разовый секс (если безопасно), \
без общей территории и планов.";

pub static FEMALE_CATEGORIES: [CategoryRule; 6] = [
    CategoryRule {
        min_total: 90,
        name: "Единорог",
        class_tag: "unicorn",
        description: "Идеал. Береги как зеницу ока, инвестируй максимум.",
    },
    CategoryRule {
        min_total: 80,
        name: "Высшая лига",
        class_tag: "top",
        description: "Отличный вариант. Стоит строить серьёзные отношения.",
    },
    CategoryRule {
        min_total: 70,
        name: "Золотая середина",
        class_tag: "gold",
        description: "Хороший баланс. Можно развивать при взаимных усилиях.",
    },
    CategoryRule {
        min_total: 60,
        name: "Рабочий вариант",
        class_tag: "work",
        description: "Есть над чем работать, но потенциал присутствует.",
    },
    CategoryRule {
        min_total: 51,
        name: "Зона риска",
        class_tag: "risk",
        description: "Много проблемных зон. Подумай дважды.",
    },
    CategoryRule {
        min_total: 0,
        name: "Непригодна",
        class_tag: "unfit",
        description: UNFIT_DESCRIPTION,
    },
];

pub static MALE_CATEGORIES: [CategoryRule; 6] = [
    CategoryRule {
        min_total: 90,
        name: "Единорог",
        class_tag: "unicorn",
        description: "Идеал. Береги как зеницу ока, вкладывайся по максимуму.",
    },
    CategoryRule {
        min_total: 80,
        name: "Высшая лига",
        class_tag: "top",
        description: "Отличный вариант. Стоит строить серьёзные отношения.",
    },
    CategoryRule {
        min_total: 70,
        name: "Золотая середина",
        class_tag: "gold",
        description: "Хороший баланс. Можно развивать при взаимных усилиях.",
    },
    CategoryRule {
        min_total: 60,
        name: "Рабочий вариант",
        class_tag: "work",
        description: "Есть над чем работать, но потенциал присутствует.",
    },
    CategoryRule {
        min_total: 51,
        name: "Зона риска",
        class_tag: "risk",
        description: "Много проблемных зон. Подумай дважды.",
    },
    CategoryRule {
        min_total: 0,
        name: "Непригоден",
        class_tag: "unfit",
        description: UNFIT_DESCRIPTION,
    },
];
