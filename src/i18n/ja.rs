//! Japanese translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "ヴィトリーヌ");

    // Drawer navigation
    m.insert(Key::NavHome, "ホーム");
    m.insert(Key::NavServices, "サービス一覧");
    m.insert(Key::NavPickup, "ピックアップ");
    m.insert(Key::NavFaq, "よくある質問");
    m.insert(Key::NavContact, "お問い合わせ");

    // Hero slides
    m.insert(Key::SlideCleaningTitle, "おうちをまるごとリフレッシュ");
    m.insert(Key::SlideCleaningSubtitle, "プロのハウスクリーニング");
    m.insert(Key::SlideAirconTitle, "エアコン分解洗浄");
    m.insert(Key::SlideAirconSubtitle, "カビ・ホコリを徹底除去");
    m.insert(Key::SlideCampaignTitle, "季節の特別キャンペーン");
    m.insert(Key::SlideCampaignSubtitle, "今だけ20%オフ");

    // Section headers
    m.insert(Key::SectionServices, "サービス一覧");
    m.insert(Key::SectionPickup, "ピックアップ");
    m.insert(Key::SectionFaq, "よくある質問");

    // Service cards
    m.insert(Key::ServiceHouseTitle, "ハウスクリーニング");
    m.insert(
        Key::ServiceHouseBody,
        "キッチン・浴室・リビングまで、住まい全体をプロの手で丁寧に仕上げます。",
    );
    m.insert(Key::ServiceOfficeTitle, "オフィス清掃");
    m.insert(
        Key::ServiceOfficeBody,
        "定期清掃からスポット対応まで、働きやすい環境づくりをサポートします。",
    );
    m.insert(Key::ServiceAirconTitle, "エアコンクリーニング");
    m.insert(
        Key::ServiceAirconBody,
        "分解洗浄で内部のカビとホコリを除去。嫌なニオイも解消します。",
    );

    // Pickup features
    m.insert(Key::PickupStaffTitle, "経験豊富なスタッフ");
    m.insert(
        Key::PickupStaffBody,
        "研修を重ねた自社スタッフが伺います。作業前のご説明も丁寧に行います。",
    );
    m.insert(Key::PickupEcoTitle, "環境にやさしい洗剤");
    m.insert(
        Key::PickupEcoBody,
        "小さなお子さまやペットのいるご家庭でも安心のエコ洗剤を使用しています。",
    );

    // Settings (drawer footer)
    m.insert(Key::SettingsDarkMode, "ダークモード");
    m.insert(Key::SettingsLanguage, "言語");

    // FAQ accordion
    m.insert(Key::FaqDurationQ, "作業時間はどのくらいかかりますか？");
    m.insert(
        Key::FaqDurationA,
        "エアコン1台あたり約90分が目安です。汚れの状態により前後します。",
    );
    m.insert(Key::FaqPrepQ, "事前に準備しておくことはありますか？");
    m.insert(
        Key::FaqPrepA,
        "作業スペースの周りの貴重品や割れ物を移動していただければ、その他の準備は不要です。",
    );
    m.insert(Key::FaqPetsQ, "ペットがいても作業できますか？");
    m.insert(
        Key::FaqPetsA,
        "可能です。作業中は別のお部屋で待機いただくようお願いしています。",
    );

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
