//! 作品集的静态内容：每个面板由若干 section 组成，section 内是按列排布的块

use crate::Color;

/// 四种面板
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    About,
    Interests,
    Contact,
    RelatedWork,
}

impl PanelKind {
    /// 叠放顺序，后面的在上层
    pub const ALL: [PanelKind; 4] = [
        PanelKind::About,
        PanelKind::Contact,
        PanelKind::RelatedWork,
        PanelKind::Interests,
    ];

    pub fn title(self) -> &'static str {
        match self {
            PanelKind::About => "About Me",
            PanelKind::Interests => "Skills",
            PanelKind::Contact => "Contact",
            PanelKind::RelatedWork => "Related Work",
        }
    }

    pub fn corner_radius(self) -> f32 {
        match self {
            PanelKind::RelatedWork => 12.0,
            _ => 8.0,
        }
    }

    /// 标题栏内边距
    pub fn title_padding(self) -> f32 {
        match self {
            PanelKind::RelatedWork => 14.0,
            _ => 8.0,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            PanelKind::About => "about",
            PanelKind::Interests => "interests",
            PanelKind::Contact => "contact",
            PanelKind::RelatedWork => "related-work",
        }
    }
}

/// 文本对齐
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Start,
    Center,
}

#[derive(Debug, Clone)]
pub struct TextBlock {
    pub text: &'static str,
    pub size: f32,
    pub line_height: f32,
    pub color: Color,
    pub align: Align,
    pub margin_bottom: f32,
}

impl TextBlock {
    pub fn new(text: &'static str, size: f32) -> Self {
        Self {
            text,
            size,
            line_height: size * 1.2,
            color: Color::BLACK,
            align: Align::Start,
            margin_bottom: 0.0,
        }
    }

    pub fn line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn centered(mut self) -> Self {
        self.align = Align::Center;
        self
    }

    pub fn margin_bottom(mut self, margin: f32) -> Self {
        self.margin_bottom = margin;
        self
    }
}

/// 标签（年份、类型、技术栈）
#[derive(Debug, Clone)]
pub struct Tag {
    pub text: &'static str,
    pub color: Color,
}

/// 贴纸：offset 是贴纸中心相对贴纸板中心的偏移
#[derive(Debug, Clone, Copy)]
pub struct Sticker {
    pub asset: &'static str,
    pub offset: (f32, f32),
}

/// 贴纸板：一块固定高度的区域，中间可选一张底图，上面是可拖动的贴纸
#[derive(Debug, Clone)]
pub struct StickerBoard {
    pub backdrop: Option<&'static str>,
    pub height: f32,
    pub margin_vertical: f32,
    pub stickers: Vec<Sticker>,
}

/// 贴纸统一尺寸
pub const STICKER_SIZE: f32 = 100.0;

#[derive(Debug, Clone)]
pub enum Block {
    Text(TextBlock),
    /// 星标小标题
    SectionTitle(&'static str),
    /// 居中的大标题
    Heading(&'static str),
    Tags(Vec<Tag>),
    /// height_ratio = 高 / 宽
    Image { asset: &'static str, height_ratio: f32 },
    Stickers(StickerBoard),
    /// 装饰分隔符
    Divider(&'static str),
    /// 外部链接
    Link { label: &'static str, url: &'static str },
    Spacer(f32),
}

#[derive(Debug, Clone)]
pub struct Section {
    /// 需要被追踪器记录偏移的 section
    pub tracked: bool,
    pub blocks: Vec<Block>,
}

impl Section {
    fn plain(blocks: Vec<Block>) -> Self {
        Self { tracked: false, blocks }
    }

    fn tracked(blocks: Vec<Block>) -> Self {
        Self { tracked: true, blocks }
    }
}

#[derive(Debug, Clone)]
pub struct PanelContent {
    pub kind: PanelKind,
    pub padding_horizontal: f32,
    pub padding_vertical: f32,
    pub sections: Vec<Section>,
}

impl PanelContent {
    pub fn tracked_count(&self) -> usize {
        self.sections.iter().filter(|s| s.tracked).count()
    }
}

pub const FIGMA_DESIGN_SYSTEM: &str =
    "https://www.figma.com/design/CJRmscdJ5GPyThvY8EmKnn/FarmByte-Design-System?node-id=0-1&t=DoOrPFehw1TEvDUo-1";
pub const FIGMA_OHYEA: &str =
    "https://www.figma.com/design/hPvLYDREAmJ29zLgKpgQco/Untitled?t=DoOrPFehw1TEvDUo-1";

const DIVIDER: &str = ". ݁₊ ⊹ . ݁ ⟡ ݁ . ⊹ ₊ ݁.";

pub fn panel_content(kind: PanelKind) -> PanelContent {
    match kind {
        PanelKind::About => about(),
        PanelKind::Interests => interests(),
        PanelKind::Contact => contact(),
        PanelKind::RelatedWork => related_work(),
    }
}

fn description(text: &'static str) -> Block {
    Block::Text(TextBlock::new(text, 20.0).margin_bottom(12.0))
}

fn about() -> PanelContent {
    let stickers = [
        ("images/stickers/gummy_bear.png", (-120.0, -40.0)),
        ("images/stickers/bracelet.png", (100.0, -50.0)),
        ("images/stickers/star_rainbow.png", (-70.0, 80.0)),
        ("images/stickers/phone.png", (100.0, 90.0)),
    ];

    PanelContent {
        kind: PanelKind::About,
        padding_horizontal: 12.0,
        padding_vertical: 12.0,
        sections: vec![Section::plain(vec![
            description("✿ My name is Nur Hanis Damia, you can call me, Mia! I build with purpose, polish and personality."),
            Block::Stickers(StickerBoard {
                backdrop: Some("images/profile.png"),
                height: 250.0,
                margin_vertical: 20.0,
                stickers: stickers.iter().map(|(asset, offset)| Sticker { asset: *asset, offset: *offset }).collect(),
            }),
            description("✿ I’m a 00-born React Native developer from Kuala Lumpur with a degree in Information Systems Engineering, but my real education came from getting my hands dirty in code."),
            description("✿ I specialize in building mobile apps with React Native and Expo, pairing tech with UI/UX design and a dash of animation flair."),
        ])],
    }
}

fn interests() -> PanelContent {
    let logos = [
        ("images/logo/react_native_logo.png", (-100.0, -40.0)),
        ("images/logo/expo_logo.png", (80.0, -50.0)),
        ("images/logo/redux_logo.png", (-60.0, 40.0)),
        ("images/logo/firebase_logo.png", (100.0, 20.0)),
        ("images/logo/typescript_logo.png", (-110.0, 120.0)),
        ("images/logo/javascript_logo.png", (70.0, 130.0)),
        ("images/logo/figma_logo.png", (-40.0, 200.0)),
        ("images/logo/lottie_logo.png", (100.0, 200.0)),
        ("images/logo/tamagui_logo.png", (-100.0, 260.0)),
        ("images/logo/unistyles_logo.png", (50.0, 260.0)),
        ("images/logo/git_logo.png", (-60.0, 320.0)),
        ("images/logo/testflight_logo.png", (90.0, 320.0)),
        ("images/logo/jira_logo.png", (-20.0, 380.0)),
    ];

    PanelContent {
        kind: PanelKind::Interests,
        padding_horizontal: 16.0,
        padding_vertical: 16.0,
        sections: vec![Section::plain(vec![
            Block::Text(
                TextBlock::new(
                    "✿ These are the tools and technologies I love working with, from mobile development to UI magic ✨",
                    18.0,
                )
                .margin_bottom(16.0),
            ),
            Block::Stickers(StickerBoard {
                backdrop: None,
                height: 500.0,
                margin_vertical: 0.0,
                stickers: logos.iter().map(|(asset, offset)| Sticker { asset: *asset, offset: *offset }).collect(),
            }),
        ])],
    }
}

fn contact() -> PanelContent {
    PanelContent {
        kind: PanelKind::Contact,
        padding_horizontal: 12.0,
        padding_vertical: 12.0,
        sections: vec![Section::plain(vec![Block::Text(
            TextBlock::new(
                "✿ Email: miawork127@gmail.com\n\
                 ✿ Phone: +60 11-10615853\n\
                 ✿ GitHub: damia23\n\n\
                 Feel free to reach out for collaborations, freelance projects, or just to say hi!\n\n\
                 I’m most active on email, but you can also find me on LinkedIn and GitHub.",
                20.0,
            )
            .line_height(22.0),
        )])],
    }
}

fn section_text(text: &'static str) -> Block {
    Block::Text(TextBlock::new(text, 18.0).line_height(24.0))
}

fn project_header(title: &'static str, year: &'static str, kind: &'static str, techs: &[&'static str]) -> Vec<Block> {
    vec![
        Block::Heading(title),
        Block::Tags(vec![
            Tag { text: year, color: Color::TAG_BLUE },
            Tag { text: kind, color: Color::TAG_GREEN },
        ]),
        Block::Spacer(10.0),
        Block::Tags(techs.iter().map(|t| Tag { text: *t, color: Color::TAG_YELLOW }).collect()),
    ]
}

fn project_image(asset: &'static str) -> Block {
    Block::Image { asset, height_ratio: 0.4 }
}

fn spacer() -> Block {
    Block::Spacer(20.0)
}

fn divider() -> Section {
    Section::plain(vec![Block::Divider(DIVIDER)])
}

fn related_work() -> PanelContent {
    let mut marketplace = project_header(
        "FarmByte Marketplace App",
        "2025",
        "Work Project",
        &["React Native Expo", "RTK Query", "Redux", "TypeScript", "Figma"],
    );
    marketplace.extend([
        project_image("images/projects/marketplace_app.png"),
        Block::SectionTitle("Project Overview"),
        section_text("The Marketplace App is part of an integrated farm-to-market ecosystem that connects farmers, B2B buyers and logistics partners to create a seamless supply chain experience. It allows buyers (from individuals to distributors and businesses) to browse, purchase and track fresh produce with ease, serving as a one-stop platform for convenient shopping and bulk orders. In this project, I focused on the frontend development of the Marketplace App. I helped build key user flows and interactive features that make the buying experience smooth and intuitive, while also ensuring consistent UI design and performance across platforms."),
        spacer(),
        Block::SectionTitle("App Features"),
        section_text("- Product Listings & Management: Enables users to browse and search products through categorized listings with efficient data handling for smooth navigation."),
        section_text("- Order Management System (OMS): Supports essential order operations, including add-to-cart, checkout, and order history tracking for a complete shopping flow."),
        section_text("- Vouchers & Discounts: Provides marketing tools such as platform vouchers and referral-based discount programs to enhance user engagement."),
        spacer(),
        Block::SectionTitle("My Contributions"),
        section_text("In the first phase of the marketplace app, I focused on building the frontend experience. I developed key modules like the My Addresses flow (using React Hook Form with Zod for validation), Request Refund, Star Harvest Listings, and the Notifications page. I also built custom UI components such as a Scroll-to-Top button and a Camera uploader that supports up to six images. I was involved in weekly deployment cycles using Firebase App Distribution for Android and TestFlight for iOS. Additionally, I contributed to AdaptByte, our internal design system, by creating reusable layouts and UI components in Figma to maintain a consistent and cohesive design across the app."),
        spacer(),
        Block::SectionTitle("Technical Implementation"),
        section_text("⚙️ Built with Expo for seamless cross-platform (iOS & Android) development."),
        section_text("🧩 Managed global state using Redux Toolkit (RTK) and RTK Query for efficient data fetching and caching."),
        section_text("📝 Handled form logic and validation with React Hook Form + Zod Schema."),
        section_text("🎨 Designed the AdaptByte design system in Figma, creating reusable layouts and UI components that guided the component library implementation."),
    ]);

    let mut adaptbyte = project_header("AdaptByte Design System", "2025", "Work Project", &["Figma"]);
    adaptbyte.extend([
        Block::Link { label: "Open Figma Design", url: FIGMA_DESIGN_SYSTEM },
        Block::SectionTitle("Project Overview"),
        section_text("AdaptByte is a lightweight, modular React Native UI library focused on speed, simplicity, and adaptability. Built with react-native-unistyles, it offers clean and customizable components for scalable, high-performance apps."),
        spacer(),
        Block::SectionTitle("My Contributions"),
        section_text("-Designed core components (e.g. buttons, form inputs, cards, icons)"),
        section_text("-Created typography + color guidelines"),
        section_text("-Wrote documentation for usage and component variations"),
    ]);

    let mut farmbyte = project_header(
        "FarmByte App",
        "2024",
        "Work Project",
        &["React Native CLI", "RTK Query", "Redux", "TypeScript", "Figma"],
    );
    farmbyte.extend([
        project_image("images/projects/farmbyte_app.png"),
        Block::SectionTitle("Project Overview"),
        section_text("The FarmByte App is a digital platform that helps farmers plan, manage, and optimize their farming activities. It provides tools for better decision-making across planning, cultivation, harvesting, and selling, while streamlining workflows and automating key processes to improve overall efficiency. The app is available on both the App Store and Google Play."),
        spacer(),
        Block::SectionTitle("App Features"),
        section_text("- Knowledge Base: Centralized hub for agriculture-related articles and learning resources, designed to support continuous farmer education and best practices."),
        section_text("- Request to Sell (RTS): Streamlines the crop selling process through a guided workflow, enabling farmers to submit sales requests digitally and eliminate manual methods."),
        section_text("- Pricing Analytics: Delivers real-time market price insights and trend analysis to help farmers make data-driven decisions and optimize profit margins."),
        section_text("- Transactions: Provides full visibility into all transaction records and order histories, ensuring transparency, traceability, and financial accountability."),
        spacer(),
        Block::SectionTitle("My Contributions"),
        section_text("I was part of the team that developed and launched the FarmByte App, a digital agriculture platform designed to help farmers manage their planning, farming, and harvesting activities more efficiently. As of January 2025, the app has onboarded over 3,000 registered farmers. My main focus was building the Request-to-Sell (RTS) workflows and integrating real-time notifications using Firebase Cloud Messaging and Notifee. I collaborated closely with the Product, Backend, and Mobile teams to enhance API performance and data synchronization, and contributed to the RTS module design in Figma, ensuring the user experience aligned with business goals and farmer needs."),
        spacer(),
        Block::SectionTitle("Technical Implementation"),
        section_text("⚛️ Built with React Native CLI for a fully native mobile experience across iOS and Android."),
        section_text("🔄 Used Redux and RTK Query for efficient state management and API data synchronization."),
        section_text("🧠 Implemented TypeScript for robust type safety and scalable, maintainable code."),
        section_text("🎨 Collaborated in Figma to design and refine UI components aligned with the app’s design system."),
        spacer(),
        Block::SectionTitle("User Feedback"),
        project_image("images/projects/farmbyte_user_review.png"),
        Block::Text(TextBlock::new("Feedback taken from farmbyte.com", 18.0).line_height(24.0).color(Color::PINK).centered()),
    ]);

    let mut ohyea = project_header("OhYea App", "2023", "Work Project", &["React Native CLI", "Redux", "Figma"]);
    ohyea.extend([
        project_image("images/projects/ohyea_app.png"),
        Block::Link { label: "Open Figma Design", url: FIGMA_OHYEA },
        Block::SectionTitle("Project Overview"),
        section_text("OhYea App is a marketplace platform designed for buying and selling secondhand or thrifted apparel and goods. It supports core marketplace functionalities such as product listing, search, user authentication, cart management, and order processing. In addition to commerce features, the platform includes an event and bazaar module that allows users to explore ongoing or upcoming events, while sellers have the capability to create, manage, and host their own events or bazaars. This creates an integrated ecosystem that combines social marketplace interactions with offline event engagement."),
        spacer(),
        Block::SectionTitle("My Contributions"),
        section_text("I designed and developed major UI flows using Figma and implemented them using React Native CLI with Redux for state management, ensuring pixel-perfect accuracy. I worked in a team of two, where I was primarily responsible for the UI/UX design and front-end development. This role was a significant learning experience, as I was new to many of the tools and technologies and had to be hands-on throughout the process."),
        spacer(),
        Block::SectionTitle("Technical Implementation"),
        section_text("🎨 Designed key user interfaces and app flows using Figma. Ensured accurate design translation and maintained visual consistency across screens."),
        section_text("📱 Built the mobile application using React Native CLI with JavaScript. Created reusable and modular components and implemented screen navigation using React Navigation."),
        section_text("🧠 Used traditional Redux for managing global state with actions, reducers, and a centralized store."),
        section_text("🔗 Integrated RESTful APIs for user authentication, product marketplace, and event/bazaar modules. Tested and debugged APIs using Postman, and connected them to the app using JavaScript and Redux. Handled request/response lifecycle, loading states, and error handling manually."),
        section_text("🗂️ Used Git for version control and GitHub for repository management, issue tracking, and collaboration."),
    ]);

    PanelContent {
        kind: PanelKind::RelatedWork,
        padding_horizontal: 30.0,
        padding_vertical: 20.0,
        sections: vec![
            Section::tracked(marketplace),
            divider(),
            Section::tracked(adaptbyte),
            divider(),
            Section::tracked(farmbyte),
            divider(),
            Section::tracked(ohyea),
            divider(),
        ],
    }
}

/// 首页文案
pub mod home {
    pub const GREETING: &str = "Hey there, I'm Damia";
    pub const INTRO: &str = "I build React Native apps with a love for UI/UX and sleek mobile design. With nearly two years of experience, I enjoy turning ideas into beautiful, easy-to-use components that make apps feel just right.";
    pub const FOOTER: &str = "© 2025 Damia, All Rights Reserved";
}
