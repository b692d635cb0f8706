//! The seeded Lumière collection.

use crate::catalog::{Product, ScentFamily};
use crate::ids::ProductId;
use crate::money::Money;

const IMAGE_BASE: &str =
    "https://cdn.poehali.dev/projects/3987a860-f7a1-4967-b613-8aab456d435e/files";

pub(super) fn lumiere_collection() -> Vec<Product> {
    vec![
        Product::new(ProductId::new(1), "Noir Ambré", ScentFamily::Woody, Money::rub(4500))
            .with_description("Глубокий аромат янтаря и пачули")
            .with_scent("Древесный, теплый")
            .with_story(
                "Вдохновлен ночными прогулками по старинным улочкам Парижа, где аромат \
                 старинных библиотек смешивается с запахом дождя.",
            )
            .with_image(format!("{IMAGE_BASE}/e52c45a5-ad5a-4991-bdfc-8f8cea4e6a48.jpg")),
        Product::new(ProductId::new(2), "Vanille Céleste", ScentFamily::Sweet, Money::rub(3800))
            .with_description("Нежная ваниль с нотами кашемира")
            .with_scent("Сладкий, обволакивающий")
            .with_story(
                "Создан под впечатлением от утреннего света, проникающего сквозь шелковые \
                 занавеси. Аромат уюта и нежности.",
            )
            .with_image(format!("{IMAGE_BASE}/57491c13-12bd-4959-8d71-13f40772e62a.jpg")),
        Product::new(ProductId::new(3), "Ébène Mystique", ScentFamily::Exotic, Money::rub(5200))
            .with_description("Эбеновое дерево и черная орхидея")
            .with_scent("Экзотический, насыщенный")
            .with_story(
                "Рожден из воспоминаний о путешествии в джунгли Азии, где древние храмы \
                 хранят секреты столетий.",
            )
            .with_image(format!("{IMAGE_BASE}/d9fdcf81-5b0e-4995-b23a-e6fc09a8d97d.jpg")),
    ]
}
