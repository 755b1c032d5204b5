use serde::{Deserialize, Serialize};

/// A candidate recipe and the ingredients it needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub need: Vec<String>,
    pub desc: String,
}

impl Recipe {
    pub fn new(name: &str, need: &[&str], desc: &str) -> Self {
        Self {
            name: name.to_string(),
            need: need.iter().map(|s| s.to_string()).collect(),
            desc: desc.to_string(),
        }
    }
}

/// Read-only recipe table, enumerated in definition order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// The built-in home cooking catalog
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_RECIPES
                .iter()
                .map(|(name, need, desc)| Recipe::new(name, need, desc))
                .collect(),
        )
    }

    pub fn all_recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

type StaticRecipe = (&'static str, &'static [&'static str], &'static str);

const BUILTIN_RECIPES: &[StaticRecipe] = &[
    (
        "계란말이",
        &["계란", "대파", "당근", "소금"],
        "계란에 다진 채소를 섞어 약불에서 돌돌 말아 익힙니다.",
    ),
    (
        "계란볶음밥",
        &["밥", "계란", "대파", "간장"],
        "파기름에 계란을 스크램블하고 밥과 간장을 넣어 센불에 볶습니다.",
    ),
    (
        "김치볶음밥",
        &["밥", "김치", "계란", "대파", "참기름"],
        "잘게 썬 김치를 볶다가 밥을 넣고 참기름으로 마무리한 뒤 계란프라이를 올립니다.",
    ),
    (
        "김치찌개",
        &["김치", "돼지고기", "두부", "대파", "양파"],
        "돼지고기와 김치를 볶은 뒤 물을 붓고 두부와 채소를 넣어 끓입니다.",
    ),
    (
        "감자조림",
        &["감자", "양파", "간장", "설탕"],
        "깍둑 썬 감자와 양파를 간장과 설탕 양념에 자작하게 조립니다.",
    ),
    (
        "감자전",
        &["감자", "소금", "식용유"],
        "감자를 곱게 갈아 소금 간을 하고 기름 두른 팬에 얇게 부칩니다.",
    ),
    (
        "카레라이스",
        &["감자", "당근", "양파", "카레", "밥"],
        "채소를 볶아 물을 붓고 카레 가루를 풀어 끓인 뒤 밥에 얹습니다.",
    ),
    (
        "토마토 계란볶음",
        &["토마토", "계란", "대파", "소금"],
        "계란을 반숙으로 볶아 두고 토마토를 볶다가 다시 합쳐 소금으로 간합니다.",
    ),
    (
        "토마토 파스타",
        &["파스타", "토마토", "양파", "마늘", "올리브유"],
        "마늘과 양파를 올리브유에 볶고 토마토를 졸여 삶은 면과 버무립니다.",
    ),
    (
        "참치마요 덮밥",
        &["밥", "참치", "마요네즈", "김"],
        "기름 뺀 참치를 마요네즈에 버무려 밥 위에 올리고 김을 뿌립니다.",
    ),
    (
        "참치김치찌개",
        &["참치", "김치", "양파", "두부"],
        "김치를 볶다가 물을 붓고 참치와 두부를 넣어 한소끔 끓입니다.",
    ),
    (
        "베이컨 에그 토스트",
        &["식빵", "베이컨", "계란", "치즈"],
        "구운 식빵에 바삭한 베이컨과 계란프라이, 치즈를 겹쳐 올립니다.",
    ),
    (
        "프렌치토스트",
        &["식빵", "계란", "우유", "설탕", "버터"],
        "계란과 우유, 설탕을 섞은 물에 식빵을 적셔 버터에 굽습니다.",
    ),
    (
        "치즈 오믈렛",
        &["계란", "치즈", "우유", "버터"],
        "우유를 섞은 계란물을 버터에 익히다가 치즈를 넣고 반으로 접습니다.",
    ),
    (
        "사과 요거트 볼",
        &["사과", "요거트", "꿀", "견과류"],
        "요거트 위에 깍둑 썬 사과와 견과류를 올리고 꿀을 뿌립니다.",
    ),
    (
        "사과잼",
        &["사과", "설탕", "레몬즙"],
        "다진 사과에 설탕과 레몬즙을 넣고 걸쭉해질 때까지 졸입니다.",
    ),
    (
        "양파볶음",
        &["양파", "간장", "버터"],
        "채 썬 양파를 버터에 투명해질 때까지 볶고 간장으로 간합니다.",
    ),
    (
        "당근라페",
        &["당근", "올리브유", "레몬즙", "소금"],
        "채 썬 당근을 소금에 절였다가 올리브유와 레몬즙에 버무립니다.",
    ),
    (
        "제육볶음",
        &["돼지고기", "양파", "고추장", "대파", "마늘"],
        "고추장 양념에 재운 돼지고기를 양파, 대파와 함께 센불에 볶습니다.",
    ),
    (
        "삼겹살 김치볶음",
        &["돼지고기", "김치", "양파"],
        "삼겹살에서 나온 기름에 김치와 양파를 함께 볶습니다.",
    ),
    (
        "된장찌개",
        &["된장", "두부", "감자", "양파", "애호박"],
        "멸치 육수에 된장을 풀고 감자와 채소, 두부를 넣어 끓입니다.",
    ),
    (
        "두부조림",
        &["두부", "간장", "대파", "고춧가루"],
        "노릇하게 부친 두부에 간장 양념을 끼얹어 졸입니다.",
    ),
    (
        "계란찜",
        &["계란", "대파", "소금"],
        "계란물에 물을 섞어 뚝배기에 넣고 약불에서 부풀어 오를 때까지 찝니다.",
    ),
    (
        "감자 치즈 그라탕",
        &["감자", "치즈", "우유", "버터"],
        "삶은 감자에 우유와 버터를 섞어 치즈를 올리고 오븐에 굽습니다.",
    ),
    (
        "우유 푸딩",
        &["우유", "계란", "설탕"],
        "우유와 계란, 설탕을 섞어 체에 거른 뒤 중탕으로 익힙니다.",
    ),
    (
        "토마토 치즈 샐러드",
        &["토마토", "치즈", "올리브유", "바질"],
        "토마토와 치즈를 번갈아 담고 올리브유와 바질을 곁들입니다.",
    ),
    (
        "참치 샌드위치",
        &["식빵", "참치", "마요네즈", "양파"],
        "참치와 다진 양파를 마요네즈에 버무려 식빵 사이에 넣습니다.",
    ),
    (
        "베이컨 감자볶음",
        &["감자", "베이컨", "양파", "후추"],
        "채 썬 감자와 베이컨, 양파를 함께 볶아 후추로 마무리합니다.",
    ),
    (
        "비빔밥",
        &["밥", "당근", "계란", "고추장", "참기름"],
        "밥 위에 볶은 나물과 계란프라이를 올리고 고추장과 참기름으로 비빕니다.",
    ),
    (
        "김치전",
        &["김치", "부침가루", "양파", "식용유"],
        "잘게 썬 김치와 양파를 반죽에 섞어 기름에 바삭하게 부칩니다.",
    ),
    (
        "당근 계란전",
        &["당근", "계란", "소금", "식용유"],
        "채 썬 당근을 계란물에 섞어 동그랗게 부칩니다.",
    ),
    (
        "요거트 스무디",
        &["요거트", "우유", "사과", "꿀"],
        "요거트와 우유, 사과를 함께 갈아 꿀로 단맛을 맞춥니다.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = Catalog::builtin();
        assert!(catalog.len() >= 30);

        let names: HashSet<_> = catalog.all_recipes().iter().map(|r| &r.name).collect();
        assert_eq!(names.len(), catalog.len(), "recipe names must be unique");

        for recipe in catalog.all_recipes() {
            assert!(!recipe.need.is_empty(), "{} needs ingredients", recipe.name);
            assert!(recipe.need.iter().all(|n| !n.trim().is_empty()));
        }
    }

    #[test]
    fn test_builtin_catalog_order_is_stable() {
        let first = Catalog::builtin();
        let second = Catalog::builtin();
        assert_eq!(first, second);
        assert_eq!(first.all_recipes()[0].name, "계란말이");
    }
}
