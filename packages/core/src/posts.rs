//! Social media marketing posts generated from a finished job.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    #[serde(rename = "garage cleanout")]
    GarageCleanout,
    #[serde(rename = "estate cleanout")]
    EstateCleanout,
    #[serde(rename = "furniture removal")]
    FurnitureRemoval,
    #[serde(rename = "appliance removal")]
    ApplianceRemoval,
    #[serde(rename = "mattress disposal")]
    MattressDisposal,
    #[serde(rename = "hot tub removal")]
    HotTubRemoval,
    #[serde(rename = "construction debris removal")]
    ConstructionDebrisRemoval,
    #[serde(rename = "yard waste removal")]
    YardWasteRemoval,
    #[serde(rename = "hoarding cleanout")]
    HoardingCleanout,
    #[serde(rename = "foreclosure cleanout")]
    ForeclosureCleanout,
}

impl ServiceType {
    pub const ALL: [ServiceType; 10] = [
        ServiceType::GarageCleanout,
        ServiceType::EstateCleanout,
        ServiceType::FurnitureRemoval,
        ServiceType::ApplianceRemoval,
        ServiceType::MattressDisposal,
        ServiceType::HotTubRemoval,
        ServiceType::ConstructionDebrisRemoval,
        ServiceType::YardWasteRemoval,
        ServiceType::HoardingCleanout,
        ServiceType::ForeclosureCleanout,
    ];

    /// Lowercase phrase used inside post text.
    pub fn value(&self) -> &'static str {
        match self {
            ServiceType::GarageCleanout => "garage cleanout",
            ServiceType::EstateCleanout => "estate cleanout",
            ServiceType::FurnitureRemoval => "furniture removal",
            ServiceType::ApplianceRemoval => "appliance removal",
            ServiceType::MattressDisposal => "mattress disposal",
            ServiceType::HotTubRemoval => "hot tub removal",
            ServiceType::ConstructionDebrisRemoval => "construction debris removal",
            ServiceType::YardWasteRemoval => "yard waste removal",
            ServiceType::HoardingCleanout => "hoarding cleanout",
            ServiceType::ForeclosureCleanout => "foreclosure cleanout",
        }
    }

    /// Title-case label for the picker.
    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::GarageCleanout => "Garage Cleanout",
            ServiceType::EstateCleanout => "Estate Cleanout",
            ServiceType::FurnitureRemoval => "Furniture Removal",
            ServiceType::ApplianceRemoval => "Appliance Removal",
            ServiceType::MattressDisposal => "Mattress Disposal",
            ServiceType::HotTubRemoval => "Hot Tub Removal",
            ServiceType::ConstructionDebrisRemoval => "Construction Debris Removal",
            ServiceType::YardWasteRemoval => "Yard Waste Removal",
            ServiceType::HoardingCleanout => "Hoarding Cleanout",
            ServiceType::ForeclosureCleanout => "Foreclosure Cleanout",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == s)
    }
}

/// Post generator input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRequest {
    pub company_name: String,
    pub service_type: Option<ServiceType>,
    /// Neighborhood, e.g. "Downtown Austin, TX".
    pub area: String,
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub website: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Facebook,
    Instagram,
    Twitter,
    Nextdoor,
    Threads,
}

/// Where a share button sends the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareTarget {
    /// The platform accepts pre-filled text in the URL.
    Intent { url: String },
    /// The platform has no pre-fill; copy the post, then open the site.
    CopyAndOpen { url: &'static str },
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::Facebook,
        Platform::Instagram,
        Platform::Twitter,
        Platform::Nextdoor,
        Platform::Threads,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::Twitter => "twitter",
            Platform::Nextdoor => "nextdoor",
            Platform::Threads => "threads",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
            Platform::Twitter => "X (Twitter)",
            Platform::Nextdoor => "Nextdoor",
            Platform::Threads => "Threads",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Platform::Facebook => "📘",
            Platform::Instagram => "📷",
            Platform::Twitter => "✖️",
            Platform::Nextdoor => "🏘️",
            Platform::Threads => "🧵",
        }
    }

    /// Whether the share URL can carry the post text.
    pub fn supports_prefill(&self) -> bool {
        matches!(self, Platform::Facebook | Platform::Twitter)
    }

    pub fn share_target(&self, post: &Post) -> ShareTarget {
        let text = urlencoding::encode(&post.text);
        match self {
            Platform::Facebook => ShareTarget::Intent {
                url: format!("https://www.facebook.com/sharer/sharer.php?quote={text}"),
            },
            Platform::Twitter => ShareTarget::Intent {
                url: format!("https://twitter.com/intent/tweet?text={text}"),
            },
            Platform::Instagram => ShareTarget::CopyAndOpen {
                url: "https://www.instagram.com/",
            },
            Platform::Nextdoor => ShareTarget::CopyAndOpen {
                url: "https://nextdoor.com/",
            },
            Platform::Threads => ShareTarget::CopyAndOpen {
                url: "https://www.threads.net/",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<String>,
}

impl Post {
    /// Text as copied to the clipboard, hashtags after a blank line.
    pub fn clipboard_text(&self) -> String {
        match &self.hashtags {
            Some(tags) => format!("{}\n\n{}", self.text, tags),
            None => self.text.clone(),
        }
    }
}

/// One post per supported platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPosts {
    pub facebook: Post,
    pub instagram: Post,
    pub twitter: Post,
    pub nextdoor: Post,
    pub threads: Post,
}

impl GeneratedPosts {
    pub fn get(&self, platform: Platform) -> &Post {
        match platform {
            Platform::Facebook => &self.facebook,
            Platform::Instagram => &self.instagram,
            Platform::Twitter => &self.twitter,
            Platform::Nextdoor => &self.nextdoor,
            Platform::Threads => &self.threads,
        }
    }

    /// Share targets for every selected platform, in display order.
    pub fn share_plan(&self, selected: &[Platform]) -> Result<Vec<(Platform, ShareTarget)>> {
        let plan: Vec<_> = Platform::ALL
            .into_iter()
            .filter(|p| selected.contains(p))
            .map(|p| (p, p.share_target(self.get(p))))
            .collect();

        if plan.is_empty() {
            return Err(Error::Validation(
                "Please select at least one platform".to_string(),
            ));
        }
        Ok(plan)
    }
}

/// Fields shared by every template once the request is validated.
struct PostContext<'a> {
    company: &'a str,
    service: &'static str,
    area: &'a str,
    phone: &'a str,
    email: &'a str,
    website: &'a str,
    service_tag: String,
    area_tag: String,
}

impl PostRequest {
    pub fn validate(&self) -> Result<ServiceType> {
        if self.company_name.trim().is_empty() {
            return Err(Error::required("Company name"));
        }
        let service = self.service_type.ok_or_else(|| Error::required("Service type"))?;
        if self.area.trim().is_empty() {
            return Err(Error::required("Area"));
        }
        if self.phone.trim().is_empty() {
            return Err(Error::required("Phone number"));
        }
        Ok(service)
    }

    /// Render posts for all platforms.
    pub fn generate(&self) -> Result<GeneratedPosts> {
        let service = self.validate()?;
        let ctx = PostContext {
            company: &self.company_name,
            service: service.value(),
            area: &self.area,
            phone: &self.phone,
            email: &self.email,
            website: &self.website,
            service_tag: strip_whitespace(service.value()),
            area_tag: strip_whitespace(primary_area(&self.area)),
        };

        Ok(GeneratedPosts {
            facebook: facebook(&ctx),
            instagram: instagram(&ctx),
            twitter: twitter(&ctx),
            nextdoor: nextdoor(&ctx),
            threads: threads(&ctx),
        })
    }
}

/// First comma-separated segment of an area, e.g. "Downtown Austin".
fn primary_area(area: &str) -> &str {
    area.split(',').next().unwrap_or(area)
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

fn contact_lines(entries: [(&str, &str); 3]) -> String {
    entries
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(prefix, value)| format!("{prefix}{value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn facebook(ctx: &PostContext<'_>) -> Post {
    let contact = contact_lines([
        ("📞 ", ctx.phone),
        ("✉️ ", ctx.email),
        ("🌐 ", ctx.website),
    ]);
    let text = format!(
        "✅ Another successful {service} completed in {area}!\n\n\
         {company} just helped another local family reclaim their space. \
         We handled everything from start to finish - quick, professional, and eco-friendly disposal.\n\n\
         Need junk removal? We serve the entire {primary} area with same-day and next-day appointments available!\n\n\
         {contact}\n\n\
         FREE quote - no hidden fees! Book your cleanout today! 🚚",
        service = ctx.service,
        area = ctx.area,
        company = ctx.company,
        primary = primary_area(ctx.area),
    );
    let hashtags = format!(
        "#JunkRemoval #{} #{} #LocalBusiness #EcoFriendly #Declutter",
        ctx.area_tag, ctx.service_tag
    );
    Post {
        text,
        hashtags: Some(hashtags),
    }
}

fn instagram(ctx: &PostContext<'_>) -> Post {
    let text = format!(
        "Another {area} transformation! ✨\n\n\
         {company} specializes in {service} and eco-friendly disposal. We make it easy - you point, we haul! \n\n\
         Same-day service available 📞 {phone}\n\n\
         Tag someone who needs this! 👇",
        area = ctx.area,
        company = ctx.company,
        service = ctx.service,
        phone = ctx.phone,
    );
    let hashtags = format!(
        "#JunkRemoval #{} #{} #BeforeAndAfter #HomeImprovement #Decluttering #LocalBusiness #SmallBusiness #EcoFriendly",
        ctx.service_tag, ctx.area_tag
    );
    Post {
        text,
        hashtags: Some(hashtags),
    }
}

fn twitter(ctx: &PostContext<'_>) -> Post {
    let link = if ctx.website.is_empty() {
        format!("Call {}", ctx.phone)
    } else {
        ctx.website.to_string()
    };
    let text = format!(
        "✅ Just completed a {service} in {area}!\n\n\
         {company} makes junk removal easy. Same-day service, eco-friendly disposal, no hidden fees.\n\n\
         Need a cleanout? {link}",
        service = ctx.service,
        area = ctx.area,
        company = ctx.company,
    );
    let hashtags = format!(
        "#JunkRemoval #{} #{} #LocalService",
        ctx.area_tag, ctx.service_tag
    );
    Post {
        text,
        hashtags: Some(hashtags),
    }
}

fn nextdoor(ctx: &PostContext<'_>) -> Post {
    let contact = contact_lines([
        ("Call/text: ", ctx.phone),
        ("Email: ", ctx.email),
        ("Website: ", ctx.website),
    ]);
    let text = format!(
        "Hi neighbors! 👋\n\n\
         {company} just completed a {service} right here in {area}!\n\n\
         As a local, family-owned business, we take pride in serving our community with reliable, affordable junk removal. \
         Whether it's a single item or a whole house cleanout, we've got you covered.\n\n\
         ✅ Same-day & next-day service\n\
         ✅ Eco-friendly disposal & donation\n\
         ✅ Free estimates\n\
         ✅ No hidden fees\n\
         ✅ Fully licensed & insured\n\n\
         {contact}\n\n\
         Supporting local businesses keeps our neighborhood strong. We'd love to help with your next project!",
        company = ctx.company,
        service = ctx.service,
        area = ctx.area,
    );
    Post {
        text,
        hashtags: None,
    }
}

fn threads(ctx: &PostContext<'_>) -> Post {
    let text = format!(
        "Just wrapped up another {service} in {area}! \n\n\
         The satisfaction of transforming a cluttered space into a clean slate never gets old 🙌\n\n\
         {company} - making your space livable again, one haul at a time.\n\n\
         DM or call {phone} for a free quote!",
        service = ctx.service,
        area = ctx.area,
        company = ctx.company,
        phone = ctx.phone,
    );
    let hashtags = format!(
        "#JunkRemoval #SmallBusiness #{} #{}",
        ctx.area_tag, ctx.service_tag
    );
    Post {
        text,
        hashtags: Some(hashtags),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use super::*;

    fn request() -> PostRequest {
        PostRequest {
            company_name: "Tex Mex Junk Removal".to_string(),
            service_type: Some(ServiceType::GarageCleanout),
            area: "Downtown Austin, TX".to_string(),
            phone: "(512) 555-0123".to_string(),
            email: String::new(),
            website: String::new(),
        }
    }

    #[test]
    fn hashtags_strip_whitespace_from_service_and_area() {
        let posts = request().generate().unwrap();
        assert_eq!(
            posts.facebook.hashtags.as_deref(),
            Some("#JunkRemoval #DowntownAustin #garagecleanout #LocalBusiness #EcoFriendly #Declutter")
        );
        assert_eq!(
            posts.threads.hashtags.as_deref(),
            Some("#JunkRemoval #SmallBusiness #DowntownAustin #garagecleanout")
        );
        assert_eq!(posts.nextdoor.hashtags, None);
    }

    #[test]
    fn facebook_mentions_primary_area_and_only_given_contacts() {
        let posts = request().generate().unwrap();
        let text = &posts.facebook.text;
        assert!(text.starts_with("✅ Another successful garage cleanout completed in Downtown Austin, TX!"));
        assert!(text.contains("We serve the entire Downtown Austin area"));
        assert!(text.contains("📞 (512) 555-0123\n\nFREE quote"));
        assert!(!text.contains("✉️"));
    }

    #[test]
    fn twitter_falls_back_to_phone_without_website() {
        let posts = request().generate().unwrap();
        assert!(posts.twitter.text.ends_with("Need a cleanout? Call (512) 555-0123"));

        let mut with_site = request();
        with_site.website = "https://texmexjunk.com".to_string();
        let posts = with_site.generate().unwrap();
        assert!(posts.twitter.text.ends_with("Need a cleanout? https://texmexjunk.com"));
    }

    #[test]
    fn nextdoor_lists_every_contact_line() {
        let mut req = request();
        req.email = "info@texmex.com".to_string();
        req.website = "https://texmex.com".to_string();
        let text = req.generate().unwrap().nextdoor.text;
        assert!(text.contains(
            "Call/text: (512) 555-0123\nEmail: info@texmex.com\nWebsite: https://texmex.com"
        ));
    }

    #[test]
    fn missing_required_fields_are_rejected() {
        let mut req = request();
        req.service_type = None;
        assert_eq!(
            req.generate().unwrap_err(),
            Error::Validation("Service type is required".to_string())
        );

        let mut req = request();
        req.area = " ".to_string();
        assert!(req.generate().is_err());
    }

    #[test]
    fn clipboard_text_appends_hashtags() {
        let post = Post {
            text: "Body".to_string(),
            hashtags: Some("#a #b".to_string()),
        };
        assert_eq!(post.clipboard_text(), "Body\n\n#a #b");
        let bare = Post {
            text: "Body".to_string(),
            hashtags: None,
        };
        assert_eq!(bare.clipboard_text(), "Body");
    }

    #[test]
    fn share_plan_encodes_prefilled_text() {
        let posts = request().generate().unwrap();
        let plan = posts
            .share_plan(&[Platform::Threads, Platform::Twitter])
            .unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].0, Platform::Twitter);
        match &plan[0].1 {
            ShareTarget::Intent { url } => {
                assert!(url.starts_with("https://twitter.com/intent/tweet?text=%E2%9C%85%20Just%20completed"));
                assert!(!url.contains(' '));
            }
            other => panic!("unexpected target {other:?}"),
        }
        assert_eq!(
            plan[1].1,
            ShareTarget::CopyAndOpen {
                url: "https://www.threads.net/"
            }
        );
    }

    #[test]
    fn share_plan_needs_a_platform() {
        let posts = request().generate().unwrap();
        assert_eq!(
            posts.share_plan(&[]).unwrap_err(),
            Error::Validation("Please select at least one platform".to_string())
        );
    }

    #[test]
    fn service_type_lookup() {
        assert_eq!(
            ServiceType::parse("hot tub removal"),
            Some(ServiceType::HotTubRemoval)
        );
        assert_eq!(ServiceType::HotTubRemoval.label(), "Hot Tub Removal");
        assert_eq!(ServiceType::parse("lawn care"), None);
    }
}
