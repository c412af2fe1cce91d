//! The fixed Ethereal Canvas content table.
use super::{Deck, Layout, PURPLE, SlideRecord, TEAL};

/// File name the deck is saved under when no other path is given.
pub const OUTPUT_FILENAME: &str = "Ethereal_Canvas_Presentation.pptx";

static SLIDES: [SlideRecord; 15] = [
    SlideRecord {
        index: 1,
        layout: Layout::Title,
        title: "🎨 Ethereal Canvas",
        body: "AI Art & NFT Platform

🌟 Transform your imagination into stunning AI-generated artwork and mint them as unique NFTs on the blockchain 🌟

React 19 | TypeScript | Web3 | AI-Powered | Cross-Platform",
        title_font_size_pt: Some(54),
        title_color: Some(PURPLE),
    },
    SlideRecord {
        index: 2,
        layout: Layout::Content,
        title: "🎯 The Challenge",
        body: "Current Market Problems:

🎨 Limited AI Art Access
• Complex tools require technical expertise
• Multiple expensive subscriptions needed

💰 NFT Complexity  
• Minting is complicated and expensive
• Requires blockchain knowledge

📱 Platform Fragmentation
• No unified cross-platform solution
• Scattered tools and services

🔗 Web3 Barriers
• Blockchain integration is developer-only territory
• High technical barriers for creators",
        title_font_size_pt: None,
        title_color: None,
    },
    SlideRecord {
        index: 3,
        layout: Layout::Content,
        title: "💡 Our Solution",
        body: "Comprehensive Platform Features:

🤖 Multi-Provider AI
• Gemini, OpenAI, Stability AI, Hugging Face
• Intelligent failover for 99.9% uptime

⛓️ One-Click NFT Minting
• Seamless blockchain integration
• MetaMask & WalletConnect support

📱 Cross-Platform Ready
• Web, Android, Desktop applications
• Unified user experience

🎨 Professional Gallery
• Portfolio management & social sharing
• NFT tracking and analytics",
        title_font_size_pt: None,
        title_color: None,
    },
    SlideRecord {
        index: 4,
        layout: Layout::Content,
        title: "🏗️ Technical Architecture",
        body: "Frontend Layer:
• React 19 with TypeScript
• Vite build system
• Tailwind CSS + Framer Motion
• Capacitor for mobile

Backend Layer:
• Netlify Functions
• Node.js serverless
• AI API integration
• CORS & security

Blockchain Layer:
• ethers.js 6
• WalletConnect v2
• Alchemy SDK
• IPFS storage",
        title_font_size_pt: None,
        title_color: None,
    },
    SlideRecord {
        index: 5,
        layout: Layout::Content,
        title: "🤖 AI Integration",
        body: "Multi-Provider AI Services:

Intelligent Failover System:
• Hugging Face (Primary - Free Tier)
• OpenAI DALL-E (Premium Quality)
• Stability AI (High Resolution)
• Replicate (Various Models)

Enhanced Features:
• AI-optimized prompt enhancement
• Real-time generation tracking
• Multiple art styles
• High-resolution exports
• 5-15 second average generation time",
        title_font_size_pt: None,
        title_color: None,
    },
    SlideRecord {
        index: 6,
        layout: Layout::Content,
        title: "⛓️ Web3 & NFT Integration",
        body: "Blockchain Features:

Wallet Connection:
• Universal wallet connectivity
• MetaMask, WalletConnect support
• 20+ wallet providers
• Automatic network detection

NFT Minting:
• One-click minting process
• IPFS metadata storage
• Multi-chain support (Ethereum, Polygon)
• Gas optimization
• Smart contract interactions",
        title_font_size_pt: None,
        title_color: None,
    },
    SlideRecord {
        index: 7,
        layout: Layout::Content,
        title: "📱 Mobile & Cross-Platform",
        body: "Android Studio Integration:
• Full Capacitor integration
• Native Android UI components
• File system access
• Push notifications
• Device integration

Platform Support:
• Web application (PWA)
• Android native app
• Desktop (Electron-ready)
• iOS (future roadmap)
• Responsive design

Development Workflow:
npm run build → npx cap sync android → npx cap open android",
        title_font_size_pt: None,
        title_color: None,
    },
    SlideRecord {
        index: 8,
        layout: Layout::Content,
        title: "📊 Performance & Metrics",
        body: "Core Web Vitals:
• 95+ Lighthouse Score
• <2s Load Time on 3G
• 99.9% AI Service Uptime
• <500KB Bundle Size

Optimization Features:
• Code splitting by route
• Image optimization & lazy loading
• Service worker caching
• 60fps mobile animations
• Progressive Web App capabilities",
        title_font_size_pt: None,
        title_color: None,
    },
    SlideRecord {
        index: 9,
        layout: Layout::Content,
        title: "💰 Business Model",
        body: "Revenue Streams:

🆓 Freemium Model
• Basic AI generation + limited NFT mints
• Community gallery access

💎 Premium Subscriptions
• Unlimited generations + premium models
• High-resolution exports

🏪 Marketplace Revenue
• 2.5% transaction fees
• Featured listing fees

🎯 Enterprise Solutions
• White-label licensing + custom models
• API access for businesses",
        title_font_size_pt: None,
        title_color: None,
    },
    SlideRecord {
        index: 10,
        layout: Layout::Content,
        title: "📈 Market Opportunity",
        body: "Market Size:
• $25B AI Art Market by 2030
• $231B NFT Market Projection
• 2.8M Active NFT Users

Growth Drivers:
• 50M+ content creators seeking monetization
• 70% of digital art consumption on mobile
• 300% increase in AI tool usage
• Growing Web3 mainstream adoption",
        title_font_size_pt: None,
        title_color: None,
    },
    SlideRecord {
        index: 11,
        layout: Layout::Content,
        title: "🔮 Roadmap",
        body: "Phase 1 ✅ (Completed):
• AI Art Generation
• Web3 Integration
• Android App
• NFT Minting

Phase 2 🚀 (Q2 2024):
• AI Video Generation
• Music Creation
• Social Features
• Advanced Editing

Phase 3 🌍 (Q3 2024):
• iOS App
• Desktop App
• Multi-Chain Support
• IPFS Integration

Phase 4 🏪 (Q4 2024):
• Built-in Marketplace
• Creator Economy
• AI Collaborations
• Custom Models",
        title_font_size_pt: None,
        title_color: None,
    },
    SlideRecord {
        index: 12,
        layout: Layout::Content,
        title: "🎯 Demo Flow",
        body: "User Journey:

1. 🎨 Generate AI Art
   Enter prompt → Select style → AI creates artwork

2. 💼 Connect Wallet
   One-click MetaMask → Network detection → Balance verification

3. 🪙 Mint as NFT
   Upload to IPFS → Smart contract → Transaction confirmation

4. 🖼️ Gallery Management
   Personal collection → NFT tracking → Social sharing

Live Demo Features:
• Real-time AI generation
• Wallet integration
• NFT minting process
• Gallery showcase",
        title_font_size_pt: None,
        title_color: None,
    },
    SlideRecord {
        index: 13,
        layout: Layout::Content,
        title: "🏆 Competitive Advantage",
        body: "Unique Value Propositions:

🔄 Multi-Provider Reliability
• 99.9% uptime vs single-provider solutions
• Intelligent failover system

📱 True Cross-Platform
• First native mobile + web + desktop experience
• Unified user interface

⛓️ Simplified Web3
• One-click vs complex multi-step processes
• User-friendly blockchain interaction

🎨 Creator-Centric Design
• Built by creators for creators
• Intuitive UX/UI design",
        title_font_size_pt: None,
        title_color: None,
    },
    SlideRecord {
        index: 14,
        layout: Layout::Content,
        title: "🚀 Ready to Create AI Masterpieces?",
        body: "Get Started Today:

🌐 Web App
• Deploy to Netlify/Vercel instantly
• Progressive Web App ready

📱 Android App
• Open in Android Studio
• Native mobile experience

⭐ GitHub Repository
• https://github.com/Sa1ndesh/Ethereal-Canvas
• MIT Open Source License

🚀 Live Demo
• Experience the platform
• Try AI art generation

Join the future of AI-powered creative expression!",
        title_font_size_pt: None,
        title_color: None,
    },
    SlideRecord {
        index: 15,
        layout: Layout::Title,
        title: "Thank You! 🙏",
        body: "Questions & Discussion

🎨 Ethereal Canvas
Democratizing AI Art Creation & NFT Minting

Contact Information:
• GitHub: @Sa1ndesh
• Repository: Sa1ndesh/Ethereal-Canvas
• Platform: Cross-platform AI Art Studio

Made with ❤️ for the AI Art Community",
        title_font_size_pt: Some(54),
        title_color: Some(TEAL),
    },
];

/// Builds the reference deck.
pub struct DeckBuilder;

impl DeckBuilder {
    /// Return the 15 slides in presentation order.
    ///
    /// Pure data construction: no inputs, no failure modes.
    pub fn build() -> Deck {
        SLIDES.iter().copied().collect()
    }
}
